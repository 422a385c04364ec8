// Copyright (C) 2026 ScientificallyFit
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod curriculum;
mod payload;
mod validation;

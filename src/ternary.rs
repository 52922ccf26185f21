// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// A one-line conditional expression.  `cargo fmt` spreads an `if`
/// expression across five lines, which buries the edge-of-image rules
/// in the neighbour and energy tables; `cq!(c, a, b)` keeps each rule
/// on one line.
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

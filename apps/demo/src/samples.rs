//! # Sample Product Data
//!
//! The winter-sports product set used by the demonstration. Isolated here so
//! the library crates carry no fixture data.
//!
//! ## Sample Set
//! ```text
//! id  name         price    sizes              available
//! ──  ───────────  ───────  ─────────────────  ─────────
//!  1  Blue skis    $5.12    210 / 220 / 230    no (marked after creation)
//!  2  Felt boots   $3.64    42 / 46            yes
//!  7  Ushanka hat  $6.12    35 / 36 / 38       yes
//!  8  Sliding wax  $0.97    blue/yellow/red    yes
//! 11  Poles        $2.00    130                no (marked after creation)
//! 22  Red skis     $5.33    210 / 215 / 230    yes
//! ```

use shopfront_core::{Product, Size};

/// The six sample products, as individually addressable handles.
#[derive(Debug, Clone)]
pub struct SampleProducts {
    pub blue_skis: Product,
    pub felt_boots: Product,
    pub ushanka_hat: Product,
    pub sliding_wax: Product,
    pub poles: Product,
    pub red_skis: Product,
}

/// Builds the sample product set.
///
/// Two products (blue skis, poles) are created available and then marked
/// unavailable, exercising the mutable availability flag.
pub fn sample_products() -> SampleProducts {
    let mut blue_skis = Product::new(
        1,
        "Blue skis",
        "For gliding over snow",
        vec![Size::Numeric(210), Size::Numeric(220), Size::Numeric(230)],
        512,
        true,
    );

    let felt_boots = Product::new(
        2,
        "Felt boots",
        "For walking in snow",
        vec![Size::Numeric(42), Size::Numeric(46)],
        364,
        true,
    );

    let ushanka_hat = Product::new(
        7,
        "Ushanka hat",
        "For winter walks",
        vec![Size::Numeric(35), Size::Numeric(36), Size::Numeric(38)],
        612,
        true,
    );

    let sliding_wax = Product::new(
        8,
        "Sliding wax",
        "For waxing skis",
        vec![
            Size::Label("blue".to_string()),
            Size::Label("yellow".to_string()),
            Size::Label("red".to_string()),
        ],
        97,
        true,
    );

    let mut poles = Product::new(
        11,
        "Poles",
        "Skiing is hard without them",
        vec![Size::Numeric(130)],
        200,
        true,
    );

    let red_skis = Product::new(
        22,
        "Red skis",
        "For gliding over snow",
        vec![Size::Numeric(210), Size::Numeric(215), Size::Numeric(230)],
        533,
        true,
    );

    blue_skis.set_available(false);
    poles.set_available(false);

    SampleProducts {
        blue_skis,
        felt_boots,
        ushanka_hat,
        sliding_wax,
        poles,
        red_skis,
    }
}

//! Command-line definition.

use clap::Parser;
use shop_core::CalculatorKind;

#[derive(Parser, Debug)]
#[command(name = "shop", version, about = "Price a shopping cart")]
pub struct Cli {
    /// Items to put in the cart, as NAME=PRICE (e.g. "Coffee=3.50")
    pub items: Vec<String>,

    /// Calculator to use: base, vip or another-vip [env: SHOP_CALCULATOR]
    #[arg(short, long)]
    pub calculator: Option<CalculatorKind>,

    /// Price the cart with every calculator
    #[arg(long, conflicts_with = "calculator")]
    pub all: bool,

    /// Print JSON instead of text [env: SHOP_OUTPUT=json]
    #[arg(long)]
    pub json: bool,
}

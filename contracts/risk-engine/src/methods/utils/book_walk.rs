use common::FixedI128;
use lending_interface::types::fill_result::FillResult;
use lending_interface::types::order_book::{BookLevel, BookSide};
use tracing::debug;

/// Cost of `size` at `price`. Selling into bids yields size / price,
/// buying from asks costs size * price.
pub fn apply_price(side: BookSide, price: FixedI128, size: FixedI128) -> Option<FixedI128> {
    match side {
        BookSide::Bids => size.checked_div(price),
        BookSide::Asks => size.checked_mul(price),
    }
}

/// Walks `levels` best to worst until `amount` is filled or the book is exhausted.
/// An exhausted book yields the cost of the filled part, the rest is reported as remaining.
pub fn walk_book(
    levels: &[BookLevel],
    side: BookSide,
    amount: FixedI128,
    max_levels: usize,
) -> FillResult {
    let mut cost = FixedI128::ZERO;
    let mut remaining = amount;

    for level in levels.iter().take(max_levels) {
        let filled = remaining.min(level.size);

        let Some(level_cost) = apply_price(side, level.price, filled) else {
            debug!(price = %level.price, size = %level.size, "skipping unpriceable level");
            continue;
        };

        let (Some(next_cost), Some(next_remaining)) =
            (cost.checked_add(level_cost), remaining.checked_sub(filled))
        else {
            debug!(price = %level.price, "fill accumulation overflow");
            break;
        };

        cost = next_cost;
        remaining = next_remaining;

        if !remaining.is_positive() {
            break;
        }
    }

    FillResult {
        cost,
        filled: amount.checked_sub(remaining).unwrap_or(FixedI128::ZERO),
        remaining,
    }
}

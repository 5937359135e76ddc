use stork_core::INITIAL_ODDS;
use stork_core::ODDS_FLOOR;
use stork_core::Odds;
use stork_core::Tokens;

/// Quotes payout multipliers for both outcomes from the current pool sizes.
///
/// Odds are inversely proportional to an outcome's own pool relative to the
/// combined pool, so the less popular side pays better. Two properties hold
/// by construction: no quote ever drops below [`ODDS_FLOOR`], and the total
/// liability `winning_pool * odds` never exceeds the collected stakes by
/// more than floor-driven rounding. Empty pools quote [`INITIAL_ODDS`] on
/// both sides.
pub fn compute(boy_pool: Tokens, girl_pool: Tokens) -> (Odds, Odds) {
    let total = boy_pool + girl_pool;
    if total == 0 {
        return (INITIAL_ODDS, INITIAL_ODDS);
    }
    let quote = |own: Tokens| {
        let raw = total as Odds / own.max(1) as Odds;
        round2(raw.max(ODDS_FLOOR))
    };
    (quote(boy_pool), quote(girl_pool))
}

/// Round to two decimal places, the resolution quoted to bettors.
fn round2(x: Odds) -> Odds {
    (x * 100.0).round() / 100.0
}

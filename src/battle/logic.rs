//! Pure battle outcome resolution.
//!
//! No side effects and no entropy: given both sides' element and effective
//! protection fraction plus the wager, the result is fully determined.
//! Subtle sign or rounding mistakes here silently corrupt a persistent
//! economy, so every delta is floored exactly once and reused.

use super::types::{BattleOutcome, Winner};
use crate::elements::Element;

/// Resolves one battle.
///
/// `player_fraction` / `opponent_fraction` are the effective protection
/// fractions of each side's selected elemental (0.0 if none).
///
/// Differing elements: dominance decides the winner, and the loser's own
/// elemental shields `floor(wager * loser_fraction)` of the loss. The
/// remainder transfers zero-sum to the winner.
///
/// Equal elements: the strictly higher fraction wins and the transfer is
/// `floor(wager * |difference|)`; equal fractions draw with zero movement.
pub fn resolve_outcome(
    player_element: Element,
    player_fraction: f64,
    opponent_element: Element,
    opponent_fraction: f64,
    wager: u32,
) -> BattleOutcome {
    if player_element == opponent_element {
        resolve_same_element(player_fraction, opponent_fraction, wager)
    } else if player_element.defeats(opponent_element) {
        resolve_dominance(true, opponent_fraction, wager)
    } else {
        resolve_dominance(false, player_fraction, wager)
    }
}

/// Elements differ: dominance picked a side, `loser_fraction` shields the
/// losing one.
fn resolve_dominance(player_won: bool, loser_fraction: f64, wager: u32) -> BattleOutcome {
    let protection_saved = floor_fraction(wager, loser_fraction);
    let transfer = i64::from(wager - protection_saved);
    if player_won {
        BattleOutcome {
            winner: Winner::Player,
            player_mana_change: transfer,
            opponent_mana_change: -transfer,
            protection_saved,
        }
    } else {
        BattleOutcome {
            winner: Winner::Opponent,
            player_mana_change: -transfer,
            opponent_mana_change: transfer,
            protection_saved,
        }
    }
}

/// Equal elements: elemental power breaks the tie.
fn resolve_same_element(
    player_fraction: f64,
    opponent_fraction: f64,
    wager: u32,
) -> BattleOutcome {
    if player_fraction == opponent_fraction {
        return BattleOutcome {
            winner: Winner::Draw,
            player_mana_change: 0,
            opponent_mana_change: 0,
            protection_saved: 0,
        };
    }

    let transfer = i64::from(floor_fraction(
        wager,
        (player_fraction - opponent_fraction).abs(),
    ));
    if player_fraction > opponent_fraction {
        BattleOutcome {
            winner: Winner::Player,
            player_mana_change: transfer,
            opponent_mana_change: -transfer,
            // What the opponent's elemental absorbed relative to an
            // unprotected loss
            protection_saved: floor_fraction(wager, opponent_fraction),
        }
    } else {
        BattleOutcome {
            winner: Winner::Opponent,
            player_mana_change: -transfer,
            opponent_mana_change: transfer,
            protection_saved: floor_fraction(wager, player_fraction),
        }
    }
}

/// `floor(wager * fraction)` computed once at the point of use.
fn floor_fraction(wager: u32, fraction: f64) -> u32 {
    (f64::from(wager) * fraction).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elementals::ElementalRarity;

    fn fraction(rarity: ElementalRarity) -> f64 {
        rarity.base_protection()
    }

    #[test]
    fn test_element_battle_without_elementals() {
        // Earth beats water: full wager transfers
        let outcome = resolve_outcome(Element::Earth, 0.0, Element::Water, 0.0, 100);
        assert_eq!(outcome.winner, Winner::Player);
        assert_eq!(outcome.player_mana_change, 100);
        assert_eq!(outcome.opponent_mana_change, -100);
        assert_eq!(outcome.protection_saved, 0);
    }

    #[test]
    fn test_loser_elemental_shields_loss() {
        // Water loses to earth; the player's epic elemental absorbs 40%
        let outcome = resolve_outcome(
            Element::Water,
            fraction(ElementalRarity::Epic),
            Element::Earth,
            0.0,
            100,
        );
        assert_eq!(outcome.winner, Winner::Opponent);
        assert_eq!(outcome.player_mana_change, -60);
        assert_eq!(outcome.opponent_mana_change, 60);
        assert_eq!(outcome.protection_saved, 40);
    }

    #[test]
    fn test_winner_elemental_does_not_shield() {
        // The winning side's elemental contributes nothing to the transfer
        let outcome = resolve_outcome(
            Element::Earth,
            fraction(ElementalRarity::Immortal),
            Element::Water,
            0.0,
            100,
        );
        assert_eq!(outcome.winner, Winner::Player);
        assert_eq!(outcome.player_mana_change, 100);
        assert_eq!(outcome.protection_saved, 0);
    }

    #[test]
    fn test_same_element_higher_fraction_wins() {
        // Fire vs fire, epic (0.4) against rare (0.2): transfer is the gap
        let outcome = resolve_outcome(
            Element::Fire,
            fraction(ElementalRarity::Epic),
            Element::Fire,
            fraction(ElementalRarity::Rare),
            100,
        );
        assert_eq!(outcome.winner, Winner::Player);
        assert_eq!(outcome.player_mana_change, 20);
        assert_eq!(outcome.opponent_mana_change, -20);
        assert_eq!(outcome.protection_saved, 20);
    }

    #[test]
    fn test_same_element_equal_fractions_draw() {
        let outcome = resolve_outcome(
            Element::Water,
            fraction(ElementalRarity::Rare),
            Element::Water,
            fraction(ElementalRarity::Rare),
            100,
        );
        assert_eq!(outcome.winner, Winner::Draw);
        assert_eq!(outcome.player_mana_change, 0);
        assert_eq!(outcome.opponent_mana_change, 0);
        assert_eq!(outcome.protection_saved, 0);
    }

    #[test]
    fn test_same_element_no_elementals_draw() {
        let outcome = resolve_outcome(Element::Fire, 0.0, Element::Fire, 0.0, 500);
        assert_eq!(outcome.winner, Winner::Draw);
        assert_eq!(outcome.player_mana_change, 0);
    }

    #[test]
    fn test_same_element_loser_without_elemental_reports_zero_saved() {
        let outcome = resolve_outcome(
            Element::Fire,
            fraction(ElementalRarity::Rare),
            Element::Fire,
            0.0,
            100,
        );
        assert_eq!(outcome.winner, Winner::Player);
        assert_eq!(outcome.player_mana_change, 20);
        assert_eq!(outcome.protection_saved, 0);
    }

    #[test]
    fn test_high_wager_immortal_protection() {
        // Fire with an immortal (0.8) loses to water at a 500 wager
        let outcome = resolve_outcome(
            Element::Fire,
            fraction(ElementalRarity::Immortal),
            Element::Water,
            0.0,
            500,
        );
        assert_eq!(outcome.winner, Winner::Opponent);
        assert_eq!(outcome.player_mana_change, -100);
        assert_eq!(outcome.opponent_mana_change, 100);
        assert_eq!(outcome.protection_saved, 400);
    }

    #[test]
    fn test_zero_wager_still_reports_winner() {
        let outcome = resolve_outcome(Element::Earth, 0.0, Element::Water, 0.0, 0);
        assert_eq!(outcome.winner, Winner::Player);
        assert_eq!(outcome.player_mana_change, 0);
        assert_eq!(outcome.opponent_mana_change, 0);
        assert_eq!(outcome.protection_saved, 0);
    }

    #[test]
    fn test_zero_sum_transfer() {
        for player in Element::ALL {
            for opponent in Element::ALL {
                for wager in [0u32, 100, 300, 500] {
                    let outcome = resolve_outcome(player, 0.3, opponent, 0.1, wager);
                    assert_eq!(
                        outcome.player_mana_change + outcome.opponent_mana_change,
                        0,
                        "deltas must mirror for {:?} vs {:?}",
                        player,
                        opponent
                    );
                }
            }
        }
    }

    #[test]
    fn test_protection_and_delta_bounds() {
        let fractions = [0.0, 0.1, 0.2, 0.4, 0.8, 0.9];
        for pf in fractions {
            for of in fractions {
                for wager in [0u32, 100, 500] {
                    let outcome =
                        resolve_outcome(Element::Fire, pf, Element::Water, of, wager);
                    assert!(outcome.protection_saved <= wager);
                    assert!(outcome.player_mana_change.unsigned_abs() <= u64::from(wager));
                    assert!(outcome.opponent_mana_change.unsigned_abs() <= u64::from(wager));
                }
            }
        }
    }

    #[test]
    fn test_fractional_results_floor_once() {
        // 0.15 of 333 is 49.95: protection floors to 49, transfer is 284
        let outcome = resolve_outcome(Element::Water, 0.15, Element::Earth, 0.0, 333);
        assert_eq!(outcome.protection_saved, 49);
        assert_eq!(outcome.player_mana_change, -284);
        assert_eq!(outcome.opponent_mana_change, 284);
    }
}

//! Canonical multi-leg structures and their selection by view.
//!
//! Every template is a list of vanilla legs laid out on a
//! [`StrikeLadder`]. Directional butterflies are centred one width into the
//! view; neutral butterflies sit at the money.

use pricer_models::instruments::OptionType;
use pricer_models::instruments::OptionType::{Call, Put};

use crate::params::Constraints;
use crate::strikes::StrikeLadder;
use crate::view::{Direction, NormalisedView, VolView};

/// Expected move above which long volatility structures are always tried.
pub const LARGE_MOVE_PCT: f64 = 6.0;

/// Named option structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StrategyTemplate {
    /// Long ATM call, short upper call
    BullCallSpread,
    /// Short ATM put, long lower put
    BullPutSpread,
    /// Two ATM calls and one ATM put
    Strap,
    /// Long wings, two short centre calls
    CallButterfly,
    /// Short near call, long far call at the same strike
    CallCalendar,
    /// Long ATM put, short lower put
    BearPutSpread,
    /// Short ATM call, long upper call
    BearCallSpread,
    /// One ATM call and two ATM puts
    Strip,
    /// Long wings, two short centre puts
    PutButterfly,
    /// Short near put, long far put at the same strike
    PutCalendar,
    /// Long ATM call and put
    LongStraddle,
    /// Short ATM call and put
    ShortStraddle,
    /// Long upper call and lower put
    LongStrangle,
    /// Short upper call and lower put
    ShortStrangle,
}

/// Expiry bucket of a template leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tenor {
    /// Generation near expiry
    Near,
    /// Generation far expiry
    Far,
}

/// One leg of a template before pricing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateLeg {
    /// Call or put
    pub option_type: OptionType,
    /// Ladder offset from the money, in widths
    pub offset: i32,
    /// Expiry bucket
    pub tenor: Tenor,
    /// Signed quantity
    pub quantity: f64,
}

fn leg(option_type: OptionType, offset: i32, quantity: f64) -> TemplateLeg {
    TemplateLeg {
        option_type,
        offset,
        tenor: Tenor::Near,
        quantity,
    }
}

fn far(option_type: OptionType, offset: i32, quantity: f64) -> TemplateLeg {
    TemplateLeg {
        option_type,
        offset,
        tenor: Tenor::Far,
        quantity,
    }
}

impl StrategyTemplate {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            StrategyTemplate::BullCallSpread => "Bull Call Spread",
            StrategyTemplate::BullPutSpread => "Bull Put Spread",
            StrategyTemplate::Strap => "Strap",
            StrategyTemplate::CallButterfly => "Call Butterfly",
            StrategyTemplate::CallCalendar => "Call Calendar",
            StrategyTemplate::BearPutSpread => "Bear Put Spread",
            StrategyTemplate::BearCallSpread => "Bear Call Spread",
            StrategyTemplate::Strip => "Strip",
            StrategyTemplate::PutButterfly => "Put Butterfly",
            StrategyTemplate::PutCalendar => "Put Calendar",
            StrategyTemplate::LongStraddle => "Long Straddle",
            StrategyTemplate::ShortStraddle => "Short Straddle",
            StrategyTemplate::LongStrangle => "Long Strangle",
            StrategyTemplate::ShortStrangle => "Short Strangle",
        }
    }

    /// True for calendar structures, which need two expiries.
    pub fn is_multi_expiry(&self) -> bool {
        matches!(
            self,
            StrategyTemplate::CallCalendar | StrategyTemplate::PutCalendar
        )
    }

    /// Leg layout for a view direction.
    ///
    /// Butterflies centre at `+1` width for bullish views, `-1` for bearish
    /// views and at the money otherwise.
    pub fn legs(&self, direction: Direction) -> Vec<TemplateLeg> {
        let centre = direction.sign() as i32;
        match self {
            StrategyTemplate::BullCallSpread => vec![leg(Call, 0, 1.0), leg(Call, 1, -1.0)],
            StrategyTemplate::BullPutSpread => vec![leg(Put, -1, 1.0), leg(Put, 0, -1.0)],
            StrategyTemplate::Strap => vec![leg(Call, 0, 2.0), leg(Put, 0, 1.0)],
            StrategyTemplate::CallButterfly => vec![
                leg(Call, centre - 1, 1.0),
                leg(Call, centre, -2.0),
                leg(Call, centre + 1, 1.0),
            ],
            StrategyTemplate::CallCalendar => vec![leg(Call, 0, -1.0), far(Call, 0, 1.0)],
            StrategyTemplate::BearPutSpread => vec![leg(Put, 0, 1.0), leg(Put, -1, -1.0)],
            StrategyTemplate::BearCallSpread => vec![leg(Call, 0, -1.0), leg(Call, 1, 1.0)],
            StrategyTemplate::Strip => vec![leg(Call, 0, 1.0), leg(Put, 0, 2.0)],
            StrategyTemplate::PutButterfly => vec![
                leg(Put, centre - 1, 1.0),
                leg(Put, centre, -2.0),
                leg(Put, centre + 1, 1.0),
            ],
            StrategyTemplate::PutCalendar => vec![leg(Put, 0, -1.0), far(Put, 0, 1.0)],
            StrategyTemplate::LongStraddle => vec![leg(Call, 0, 1.0), leg(Put, 0, 1.0)],
            StrategyTemplate::ShortStraddle => vec![leg(Call, 0, -1.0), leg(Put, 0, -1.0)],
            StrategyTemplate::LongStrangle => vec![leg(Call, 1, 1.0), leg(Put, -1, 1.0)],
            StrategyTemplate::ShortStrangle => vec![leg(Call, 1, -1.0), leg(Put, -1, -1.0)],
        }
    }

    /// Lowest and highest ladder strikes the template uses.
    pub fn strike_range(&self, direction: Direction, ladder: &StrikeLadder) -> (f64, f64) {
        self.legs(direction)
            .iter()
            .map(|l| ladder.strike(l.offset))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), k| {
                (lo.min(k), hi.max(k))
            })
    }
}

/// Templates to try for a view, in enumeration order without duplicates.
///
/// # Examples
///
/// ```
/// use pricer_strategy::params::Constraints;
/// use pricer_strategy::templates::{templates_for, StrategyTemplate};
/// use pricer_strategy::view::{Direction, MarketView};
///
/// let view = MarketView { direction: Direction::Bullish, move_pct: 3.0, ..Default::default() }
///     .normalise(100.0)
///     .unwrap();
/// let templates = templates_for(&view, &Constraints::default());
/// assert_eq!(templates[0], StrategyTemplate::BullCallSpread);
/// assert!(!templates.contains(&StrategyTemplate::CallCalendar));
/// ```
pub fn templates_for(view: &NormalisedView, constraints: &Constraints) -> Vec<StrategyTemplate> {
    use StrategyTemplate::*;

    let multi = constraints.allow_multi_expiry;
    let vol_up = view.vol_view == VolView::Up;

    let mut templates = match view.direction {
        Direction::Bullish => vec![BullCallSpread, BullPutSpread, Strap, CallButterfly],
        Direction::Bearish => vec![BearPutSpread, BearCallSpread, Strip, PutButterfly],
        Direction::Neutral if vol_up => {
            vec![LongStraddle, LongStrangle, CallButterfly, PutButterfly]
        }
        Direction::Neutral => vec![ShortStraddle, ShortStrangle, CallButterfly, PutButterfly],
    };

    if multi {
        match view.direction {
            Direction::Bullish => templates.push(CallCalendar),
            Direction::Bearish => templates.push(PutCalendar),
            Direction::Neutral => templates.extend([CallCalendar, PutCalendar]),
        }
    }

    if vol_up || view.event || view.move_size_pct > LARGE_MOVE_PCT {
        for extra in [LongStraddle, LongStrangle] {
            if !templates.contains(&extra) {
                templates.push(extra);
            }
        }
    }

    templates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::MarketView;

    fn view(direction: Direction, vol_view: VolView, event: bool, move_pct: f64) -> NormalisedView {
        MarketView {
            direction,
            vol_view,
            event,
            move_pct,
            ..Default::default()
        }
        .normalise(100.0)
        .unwrap()
    }

    #[test]
    fn test_bearish_mirror_set() {
        let t = templates_for(
            &view(Direction::Bearish, VolView::Flat, false, 2.0),
            &Constraints::default(),
        );
        use StrategyTemplate::*;
        assert_eq!(t, vec![BearPutSpread, BearCallSpread, Strip, PutButterfly]);
    }

    #[test]
    fn test_neutral_short_unless_vol_up() {
        use StrategyTemplate::*;
        let quiet = templates_for(
            &view(Direction::Neutral, VolView::Flat, false, 0.0),
            &Constraints::default(),
        );
        assert!(quiet.contains(&ShortStraddle) && quiet.contains(&ShortStrangle));
        assert!(!quiet.contains(&LongStraddle));

        let vol_up = templates_for(
            &view(Direction::Neutral, VolView::Up, false, 0.0),
            &Constraints::default(),
        );
        assert!(vol_up.contains(&LongStraddle) && !vol_up.contains(&ShortStraddle));
        assert_eq!(vol_up.iter().filter(|&&t| t == LongStraddle).count(), 1);
    }

    #[test]
    fn test_long_vol_added_for_event_or_large_move() {
        use StrategyTemplate::*;
        let event = templates_for(
            &view(Direction::Bullish, VolView::Flat, true, 2.0),
            &Constraints::default(),
        );
        assert!(event.contains(&LongStraddle) && event.contains(&LongStrangle));

        let big = templates_for(
            &view(Direction::Bearish, VolView::Flat, false, 7.0),
            &Constraints::default(),
        );
        assert!(big.contains(&LongStraddle));

        let small = templates_for(
            &view(Direction::Bearish, VolView::Flat, false, 6.0),
            &Constraints::default(),
        );
        assert!(!small.contains(&LongStraddle));
    }

    #[test]
    fn test_calendars_need_multi_expiry() {
        use StrategyTemplate::*;
        let constraints = Constraints {
            allow_multi_expiry: true,
            ..Default::default()
        };
        let t = templates_for(&view(Direction::Neutral, VolView::Flat, false, 0.0), &constraints);
        assert!(t.contains(&CallCalendar) && t.contains(&PutCalendar));
        assert!(CallCalendar.is_multi_expiry());
        assert!(!Strap.is_multi_expiry());
    }

    #[test]
    fn test_butterfly_centres_follow_direction() {
        let offsets = |d| {
            StrategyTemplate::CallButterfly
                .legs(d)
                .iter()
                .map(|l| l.offset)
                .collect::<Vec<_>>()
        };
        assert_eq!(offsets(Direction::Bullish), vec![0, 1, 2]);
        assert_eq!(offsets(Direction::Neutral), vec![-1, 0, 1]);
        assert_eq!(offsets(Direction::Bearish), vec![-2, -1, 0]);
    }

    #[test]
    fn test_templates_are_quantity_balanced_where_expected() {
        for t in [
            StrategyTemplate::BullCallSpread,
            StrategyTemplate::BearPutSpread,
            StrategyTemplate::CallButterfly,
            StrategyTemplate::PutCalendar,
        ] {
            let net: f64 = t.legs(Direction::Neutral).iter().map(|l| l.quantity).sum();
            assert_eq!(net, 0.0, "{}", t.name());
        }
    }

    #[test]
    fn test_strike_range() {
        let ladder = StrikeLadder::new(100.0, 10.0, 1.0);
        let (low, high) = StrategyTemplate::PutButterfly.strike_range(Direction::Bearish, &ladder);
        assert_eq!(low, 80.0);
        assert_eq!(high, 100.0);

        let (low, high) = StrategyTemplate::LongStrangle.strike_range(Direction::Neutral, &ladder);
        assert_eq!((low, high), (90.0, 110.0));
    }
}

//! Card-deck carousel for projects and the hover stack for skills.

use super::MotionError;

/// Active position within a ring of `len` cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    active: usize,
    len: usize,
}

impl Deck {
    pub fn new(len: usize) -> Result<Self, MotionError> {
        if len == 0 {
            return Err(MotionError::EmptyDeck);
        }
        Ok(Self { active: 0, len })
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Number of cards in the ring. Never zero.
    pub fn count(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        self.active = (self.active + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.active = (self.active + self.len - 1) % self.len;
    }

    /// Out-of-range targets wrap.
    pub fn jump(&mut self, index: usize) {
        self.active = index % self.len;
    }

    pub fn transform(&self, index: usize) -> CardTransform {
        resolve_card_transform(index, self.active, self.len)
    }
}

/// Signed ring distance from `active` to `index`, minimising `|diff|`.
///
/// When both directions are equally far (even-sized rings) the positive
/// direction wins.
pub fn circular_diff(index: usize, active: usize, total: usize) -> i64 {
    if total == 0 {
        return 0;
    }
    let n = total as i64;
    let raw = (index as i64 - active as i64).rem_euclid(n);
    if raw > n / 2 {
        raw - n
    } else {
        raw
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Active,
    Adjacent,
    Flank,
    OffStage,
}

/// Declarative placement of one card in the deck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub tier: Tier,
    pub translate_pct: f64,
    pub scale: f64,
    pub rotate_deg: f64,
    pub z_index: i32,
    pub opacity: f64,
    pub interactive: bool,
}

impl CardTransform {
    pub fn transform_css(&self) -> String {
        match self.tier {
            Tier::OffStage => format!(
                "translateX({}%) scale({})",
                self.translate_pct, self.scale
            ),
            _ => format!(
                "translateX({}%) scale({}) rotateY({}deg)",
                self.translate_pct, self.scale, self.rotate_deg
            ),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: {}; z-index: {}; opacity: {}; pointer-events: {};",
            self.transform_css(),
            self.z_index,
            self.opacity,
            if self.interactive { "auto" } else { "none" }
        )
    }
}

pub fn resolve_card_transform(index: usize, active: usize, total: usize) -> CardTransform {
    let diff = circular_diff(index, active, total);
    // cards to the right turn away with a negative rotation
    let side = if diff < 0 { -1.0 } else { 1.0 };
    match diff.unsigned_abs() {
        0 => CardTransform {
            tier: Tier::Active,
            translate_pct: 0.0,
            scale: 1.0,
            rotate_deg: 0.0,
            z_index: 50,
            opacity: 1.0,
            interactive: true,
        },
        1 => CardTransform {
            tier: Tier::Adjacent,
            translate_pct: 65.0 * side,
            scale: 0.8,
            rotate_deg: -20.0 * side,
            z_index: 40,
            opacity: 0.6,
            interactive: true,
        },
        2 => CardTransform {
            tier: Tier::Flank,
            translate_pct: 100.0 * side,
            scale: 0.65,
            rotate_deg: -30.0 * side,
            z_index: 30,
            opacity: 0.3,
            interactive: true,
        },
        _ => CardTransform {
            tier: Tier::OffStage,
            translate_pct: 120.0 * side,
            scale: 0.5,
            rotate_deg: 0.0,
            z_index: 0,
            opacity: 0.0,
            interactive: false,
        },
    }
}

/// Placement of one skill card in the overlapping two-column stack.
#[derive(Debug, Clone, PartialEq)]
pub struct StackCard {
    pub hovered: bool,
    pub z_index: i32,
    pub margin_top_px: i32,
    pub transform: String,
    pub transition: &'static str,
}

impl StackCard {
    pub fn style(&self, index: usize) -> String {
        format!(
            "transition: all 0.7s cubic-bezier(0.4, 0, 0.2, 1); transition-delay: {}ms; z-index: {}; margin-top: {}px;",
            index * 100,
            self.z_index,
            self.margin_top_px
        )
    }

    pub fn inner_style(&self) -> String {
        format!("transform: {}; transition: {};", self.transform, self.transition)
    }
}

pub fn resolve_stack_card(index: usize, hovered: Option<usize>) -> StackCard {
    let stack = (index / 2) as i32;
    let left_column = index % 2 == 0;
    if hovered == Some(index) {
        StackCard {
            hovered: true,
            z_index: 50,
            margin_top_px: if stack > 0 { -120 } else { 0 },
            transform: "translateY(-24px) scale(1.05)".to_string(),
            transition: "all 0.5s cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    } else {
        StackCard {
            hovered: false,
            z_index: 30 - stack,
            margin_top_px: if stack > 0 { -120 } else { 0 },
            transform: format!(
                "translateY({}px) rotate({}deg)",
                stack * 6,
                if left_column { -0.5 } else { 0.5 }
            ),
            transition: "all 0.6s cubic-bezier(0.4, 0, 0.2, 1)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_card_is_centered() {
        for total in 1..=9 {
            for active in 0..total {
                let t = resolve_card_transform(active, active, total);
                assert_eq!(t.tier, Tier::Active);
                assert_eq!(t.translate_pct, 0.0);
                assert_eq!(t.z_index, 50);
                assert!(t.interactive);
            }
        }
    }

    #[test]
    fn test_wraparound_is_adjacent() {
        // last card sits left of the first
        let t = resolve_card_transform(5, 0, 6);
        assert_eq!(t.tier, Tier::Adjacent);
        assert_eq!(t.translate_pct, -65.0);
        assert_eq!(t.rotate_deg, 20.0);

        let t = resolve_card_transform(1, 0, 6);
        assert_eq!(t.translate_pct, 65.0);
        assert_eq!(t.rotate_deg, -20.0);
    }

    #[test]
    fn test_tiers_by_distance() {
        let tiers: Vec<Tier> = (0..6).map(|i| resolve_card_transform(i, 0, 6).tier).collect();
        assert_eq!(
            tiers,
            vec![
                Tier::Active,
                Tier::Adjacent,
                Tier::Flank,
                Tier::OffStage,
                Tier::Flank,
                Tier::Adjacent,
            ]
        );
        let hidden = resolve_card_transform(3, 0, 6);
        assert_eq!(hidden.opacity, 0.0);
        assert!(!hidden.interactive);
        assert_eq!(hidden.transform_css(), "translateX(120%) scale(0.5)");
    }

    #[test]
    fn test_small_rings_prefer_short_distance() {
        assert_eq!(circular_diff(3, 0, 4), -1);
        assert_eq!(circular_diff(2, 0, 4), 2);
        assert_eq!(circular_diff(0, 2, 4), 2);
        assert_eq!(circular_diff(1, 0, 2), 1);
        assert_eq!(circular_diff(0, 1, 2), 1);
        assert_eq!(circular_diff(2, 0, 3), -1);
        assert_eq!(resolve_card_transform(2, 0, 3).tier, Tier::Adjacent);
    }

    #[test]
    fn test_deck_navigation_cycles() {
        let mut deck = Deck::new(6).expect("non-empty deck");
        deck.jump(4);
        for _ in 0..deck.count() {
            deck.next();
        }
        assert_eq!(deck.active(), 4);

        deck.next();
        deck.prev();
        assert_eq!(deck.active(), 4);

        deck.jump(0);
        deck.prev();
        assert_eq!(deck.active(), 5);

        deck.jump(13);
        assert_eq!(deck.active(), 1);
    }

    #[test]
    fn test_empty_deck_rejected() {
        assert_eq!(Deck::new(0), Err(MotionError::EmptyDeck));
        assert_eq!(Deck::new(1).map(|d| d.count()), Ok(1));
    }

    #[test]
    fn test_card_style() {
        let t = resolve_card_transform(1, 0, 6);
        assert_eq!(
            t.style(),
            "transform: translateX(65%) scale(0.8) rotateY(-20deg); z-index: 40; opacity: 0.6; pointer-events: auto;"
        );
    }

    #[test]
    fn test_stack_card_hover() {
        let idle = resolve_stack_card(3, None);
        assert!(!idle.hovered);
        assert_eq!(idle.z_index, 29);
        assert_eq!(idle.margin_top_px, -120);
        assert_eq!(idle.transform, "translateY(6px) rotate(0.5deg)");

        let hovered = resolve_stack_card(3, Some(3));
        assert!(hovered.hovered);
        assert_eq!(hovered.z_index, 50);
        assert_eq!(hovered.transform, "translateY(-24px) scale(1.05)");

        let neighbour = resolve_stack_card(0, Some(3));
        assert!(!neighbour.hovered);
        assert_eq!(neighbour.z_index, 30);
        assert_eq!(neighbour.margin_top_px, 0);
        assert_eq!(neighbour.transform, "translateY(0px) rotate(-0.5deg)");
    }
}

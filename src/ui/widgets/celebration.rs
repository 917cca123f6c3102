//! Balloons rising over the screen after a message is sent.

use rand::Rng;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

/// Number of ticks the effect stays on screen.
///
pub const DURATION_TICKS: u16 = 50;

const BALLOON_COUNT: usize = 24;
const BALLOON: &str = "O";
const STRING: &str = "|";

#[derive(Debug, Clone, PartialEq)]
struct Balloon {
    x: f32,
    y: f32,
    speed: f32,
    color: Color,
}

/// Celebration effect state, advanced once per tick.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Celebration {
    balloons: Vec<Balloon>,
    ticks_left: u16,
}

impl Celebration {
    /// Scatter balloons below the bottom edge, each rising at its own speed.
    ///
    pub fn new<R: Rng>(rng: &mut R, palette: &[Color]) -> Self {
        let balloons = (0..BALLOON_COUNT)
            .map(|_| Balloon {
                x: rng.gen_range(0.0..1.0),
                y: rng.gen_range(1.0..1.4),
                speed: rng.gen_range(0.02..0.06),
                color: if palette.is_empty() {
                    Color::White
                } else {
                    palette[rng.gen_range(0..palette.len())]
                },
            })
            .collect();
        Celebration {
            balloons,
            ticks_left: DURATION_TICKS,
        }
    }

    /// Move every balloon up one step. Returns false once the effect is over.
    ///
    pub fn tick(&mut self) -> bool {
        self.ticks_left = self.ticks_left.saturating_sub(1);
        for balloon in self.balloons.iter_mut() {
            balloon.y -= balloon.speed;
        }
        !self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.ticks_left == 0
    }

    /// Cells occupied by balloon heads within the given area.
    ///
    pub fn positions(&self, area: Rect) -> Vec<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return vec![];
        }
        self.balloons
            .iter()
            .filter(|b| (0.0..1.0).contains(&b.y))
            .map(|b| {
                let col = area.x + (b.x * f32::from(area.width - 1)).round() as u16;
                let row = area.y + (b.y * f32::from(area.height)) as u16;
                (col, row.min(area.bottom() - 1))
            })
            .collect()
    }
}

impl Widget for &Celebration {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let heads = self.positions(area);
        let visible = self.balloons.iter().filter(|b| (0.0..1.0).contains(&b.y));
        for ((col, row), balloon) in heads.into_iter().zip(visible) {
            buf.get_mut(col, row)
                .set_symbol(BALLOON)
                .set_fg(balloon.color);
            if row + 1 < area.bottom() {
                buf.get_mut(col, row + 1)
                    .set_symbol(STRING)
                    .set_fg(balloon.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn celebration() -> Celebration {
        let mut rng = StdRng::seed_from_u64(7);
        Celebration::new(&mut rng, &[Color::Blue, Color::Magenta])
    }

    #[test]
    fn test_starts_below_the_screen() {
        let celebration = celebration();
        assert!(celebration.positions(Rect::new(0, 0, 80, 24)).is_empty());
        assert!(!celebration.is_finished());
    }

    #[test]
    fn test_balloons_rise_into_view() {
        let mut celebration = celebration();
        let area = Rect::new(0, 0, 80, 24);
        for _ in 0..15 {
            celebration.tick();
        }
        let positions = celebration.positions(area);
        assert!(!positions.is_empty());
        assert!(positions
            .iter()
            .all(|(col, row)| *col < area.right() && *row < area.bottom()));
    }

    #[test]
    fn test_finishes_after_duration() {
        let mut celebration = celebration();
        let mut running_ticks = 0;
        while celebration.tick() {
            running_ticks += 1;
        }
        assert_eq!(running_ticks, DURATION_TICKS - 1);
        assert!(celebration.is_finished());
    }

    #[test]
    fn test_render_draws_balloons() {
        let mut celebration = celebration();
        for _ in 0..15 {
            celebration.tick();
        }
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        (&celebration).render(area, &mut buffer);
        let (col, row) = *celebration.positions(area).last().unwrap();
        assert_eq!(buffer.get(col, row).symbol(), BALLOON);
    }

    #[test]
    fn test_empty_area() {
        assert!(celebration().positions(Rect::new(0, 0, 0, 0)).is_empty());
    }
}

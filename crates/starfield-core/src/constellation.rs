//! Static constellation charts and their placement on a surface.

use crate::config::Span;
use crate::error::TemplateError;
use crate::particle::{Bounds, Twinkle};
use glam::Vec2;
use rand::Rng;

/// Star chart in template-local pixel coordinates.
#[derive(Debug, PartialEq)]
pub struct ConstellationTemplate {
    pub name: &'static str,
    pub points: &'static [[f32; 2]],
    pub lines: &'static [[usize; 2]],
}

/// One axis of a placement offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Coord {
    /// Measured from the left/top.
    Start(f32),
    /// Measured back from the right/bottom.
    End(f32),
    /// Measured from the middle of the axis.
    Center(f32),
}

impl Coord {
    pub fn resolve(self, extent: f32) -> f32 {
        match self {
            Coord::Start(v) => v,
            Coord::End(v) => extent - v,
            Coord::Center(v) => extent / 2.0 + v,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Placement {
    pub template: &'static ConstellationTemplate,
    pub x: Coord,
    pub y: Coord,
    /// Shown only when the surface is strictly larger than this on both axes.
    pub min_size: Option<[f32; 2]>,
}

impl Placement {
    pub fn offset(&self, bounds: Bounds) -> Vec2 {
        Vec2::new(self.x.resolve(bounds.width), self.y.resolve(bounds.height))
    }

    pub fn is_visible(&self, bounds: Bounds) -> bool {
        match self.min_size {
            Some([w, h]) => bounds.width > w && bounds.height > h,
            None => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstellationPoint {
    pub pos: Vec2,
    pub twinkle: Twinkle,
}

/// Placed constellation; built once per scene start and never mutated.
#[derive(Clone, Debug)]
pub struct ConstellationGroup {
    name: &'static str,
    points: Vec<ConstellationPoint>,
    lines: &'static [[usize; 2]],
}

impl ConstellationGroup {
    pub fn from_template<R: Rng + ?Sized>(
        template: &'static ConstellationTemplate,
        offset: Vec2,
        twinkle_speed: Span,
        rng: &mut R,
    ) -> Result<Self, TemplateError> {
        let count = template.points.len();
        if let Some(&line) = template.lines.iter().find(|[a, b]| *a >= count || *b >= count) {
            return Err(TemplateError::LineOutOfRange {
                name: template.name,
                line,
                points: count,
            });
        }
        let points = template
            .points
            .iter()
            .map(|&[x, y]| ConstellationPoint {
                pos: Vec2::new(x, y) + offset,
                twinkle: Twinkle::random(twinkle_speed, rng),
            })
            .collect();
        Ok(Self {
            name: template.name,
            points,
            lines: template.lines,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn points(&self) -> &[ConstellationPoint] {
        &self.points
    }

    pub fn lines(&self) -> &'static [[usize; 2]] {
        self.lines
    }

    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.lines
            .iter()
            .map(move |&[a, b]| (self.points[a].pos, self.points[b].pos))
    }
}

pub static SAGITTARIUS: ConstellationTemplate = ConstellationTemplate {
    name: "Sagittarius",
    points: &[
        [127.5, 67.5],
        [97.5, 37.5],
        [67.5, 22.5],
        [112.5, 22.5],
        [142.5, 22.5],
        [187.5, 37.5],
        [172.5, 67.5],
        [202.5, 82.5],
        [157.5, 97.5],
        [172.5, 127.5],
        [97.5, 97.5],
        [67.5, 112.5],
        [52.5, 142.5],
        [37.5, 67.5],
        [22.5, 37.5],
    ],
    lines: &[
        [0, 1],
        [1, 2],
        [1, 3],
        [3, 4],
        [4, 5],
        [0, 6],
        [6, 7],
        [6, 8],
        [8, 9],
        [0, 10],
        [10, 11],
        [11, 12],
        [1, 13],
        [13, 14],
    ],
};

pub static ORION: ConstellationTemplate = ConstellationTemplate {
    name: "Orion",
    points: &[
        [96.0, 48.0],
        [126.0, 60.0],
        [96.0, 153.0],
        [183.0, 150.0],
        [172.5, 213.0],
        [210.0, 243.0],
        [114.0, 246.0],
        [105.0, 300.0],
        [243.0, 57.0],
        [264.0, 96.0],
        [273.0, 165.0],
        [270.0, 217.5],
        [153.0, 115.5],
        [273.0, 138.0],
        [144.0, 231.0],
        [217.5, 303.0],
    ],
    lines: &[
        [0, 2],
        [1, 2],
        [2, 6],
        [2, 12],
        [3, 4],
        [4, 5],
        [4, 14],
        [6, 7],
        [8, 9],
        [10, 11],
        [9, 13],
        [3, 13],
        [13, 10],
        [12, 3],
        [6, 14],
        [15, 7],
        [15, 5],
    ],
};

pub static CANCER: ConstellationTemplate = ConstellationTemplate {
    name: "Cancer",
    points: &[[0.0, 0.0], [40.0, 10.0], [50.0, 20.0], [60.0, 60.0], [80.0, 30.0]],
    lines: &[[0, 1], [1, 2], [2, 3], [2, 4]],
};

pub static BIG: ConstellationTemplate = ConstellationTemplate {
    name: "Big",
    points: &[
        [80.0, 30.0],
        [95.0, 65.0],
        [100.0, 90.0],
        [110.0, 125.0],
        [155.0, 125.0],
        [90.0, 160.0],
        [150.0, 170.0],
    ],
    lines: &[[0, 1], [1, 2], [2, 3], [3, 4], [3, 5], [4, 6], [5, 6]],
};

pub static GEMINI: ConstellationTemplate = ConstellationTemplate {
    name: "Gemini",
    points: &[
        [90.0, 15.0],
        [120.0, 52.5],
        [180.0, 30.0],
        [195.0, 52.5],
        [60.0, 75.0],
        [150.0, 82.5],
        [225.0, 105.0],
        [277.5, 112.5],
        [105.0, 180.0],
        [45.0, 247.5],
        [105.0, 240.0],
        [195.0, 322.5],
        [225.0, 255.0],
        [255.0, 322.5],
        [292.5, 337.5],
        [337.5, 337.5],
    ],
    lines: &[
        [0, 1],
        [1, 5],
        [2, 3],
        [3, 6],
        [4, 1],
        [5, 6],
        [6, 7],
        [1, 8],
        [6, 12],
        [8, 9],
        [8, 10],
        [11, 12],
        [12, 13],
        [13, 14],
        [14, 15],
    ],
};

pub static SCORPIUS: ConstellationTemplate = ConstellationTemplate {
    name: "Scorpius",
    points: &[
        [120.0, 65.0],
        [145.0, 25.0],
        [170.0, 45.0],
        [160.0, 70.0],
        [180.0, 70.0],
        [130.0, 85.0],
        [115.0, 125.0],
        [130.0, 150.0],
        [110.0, 165.0],
        [85.0, 160.0],
        [65.0, 145.0],
        [50.0, 125.0],
        [35.0, 140.0],
    ],
    lines: &[
        [0, 1],
        [1, 2],
        [0, 3],
        [3, 4],
        [0, 5],
        [5, 6],
        [6, 7],
        [7, 8],
        [8, 9],
        [9, 10],
        [10, 11],
        [11, 12],
    ],
};

pub static TAURUS: ConstellationTemplate = ConstellationTemplate {
    name: "Taurus",
    points: &[
        [30.0, 30.0],
        [80.0, 50.0],
        [20.0, 80.0],
        [60.0, 90.0],
        [110.0, 110.0],
        [160.0, 120.0],
        [180.0, 110.0],
        [130.0, 140.0],
        [120.0, 160.0],
        [110.0, 180.0],
    ],
    lines: &[
        [0, 1],
        [1, 3],
        [2, 3],
        [3, 4],
        [4, 5],
        [5, 6],
        [4, 7],
        [7, 8],
        [8, 9],
    ],
};

pub static VIRGO: ConstellationTemplate = ConstellationTemplate {
    name: "Virgo",
    points: &[
        [80.0, 40.0],
        [120.0, 70.0],
        [140.0, 50.0],
        [170.0, 30.0],
        [150.0, 85.0],
        [110.0, 110.0],
        [60.0, 120.0],
        [30.0, 140.0],
        [140.0, 160.0],
        [100.0, 180.0],
        [80.0, 190.0],
        [90.0, 130.0],
        [120.0, 140.0],
    ],
    lines: &[
        [0, 1],
        [1, 2],
        [2, 3],
        [1, 4],
        [4, 5],
        [5, 6],
        [6, 7],
        [5, 8],
        [8, 9],
        [9, 10],
        [5, 11],
        [11, 12],
        [4, 8],
    ],
};

pub static MINI_URSA: ConstellationTemplate = ConstellationTemplate {
    name: "MiniUrsa",
    points: &[
        [20.0, 20.0],
        [35.0, 30.0],
        [50.0, 25.0],
        [65.0, 35.0],
        [50.0, 50.0],
        [35.0, 45.0],
        [25.0, 40.0],
    ],
    lines: &[[0, 1], [1, 2], [2, 3], [3, 4], [4, 5], [5, 6], [6, 0]],
};

pub static MINI_ORION: ConstellationTemplate = ConstellationTemplate {
    name: "MiniOrion",
    points: &[[30.0, 15.0], [45.0, 25.0], [30.0, 50.0], [60.0, 45.0], [45.0, 65.0]],
    lines: &[[0, 2], [1, 2], [2, 4], [2, 3], [3, 4]],
};

pub static TEMPLATES: [&ConstellationTemplate; 10] = [
    &SAGITTARIUS,
    &ORION,
    &CANCER,
    &BIG,
    &GEMINI,
    &SCORPIUS,
    &TAURUS,
    &VIRGO,
    &MINI_URSA,
    &MINI_ORION,
];

const fn at(template: &'static ConstellationTemplate, x: Coord, y: Coord) -> Placement {
    Placement {
        template,
        x,
        y,
        min_size: None,
    }
}

pub static MAIN_PLACEMENTS: &[Placement] = &[
    at(&SAGITTARIUS, Coord::End(200.0), Coord::Start(100.0)),
    at(&ORION, Coord::Start(-50.0), Coord::End(250.0)),
    at(&CANCER, Coord::Start(50.0), Coord::Start(200.0)),
    at(&BIG, Coord::Start(250.0), Coord::Start(200.0)),
    at(&GEMINI, Coord::Start(750.0), Coord::Start(400.0)),
    at(&SCORPIUS, Coord::End(200.0), Coord::Start(400.0)),
    at(&TAURUS, Coord::Center(0.0), Coord::Start(-50.0)),
    at(&VIRGO, Coord::Start(100.0), Coord::Start(-80.0)),
    at(&TAURUS, Coord::End(200.0), Coord::End(125.0)),
];

pub static SIDEBAR_PLACEMENTS: &[Placement] = &[
    Placement {
        template: &MINI_URSA,
        x: Coord::Start(50.0),
        y: Coord::Start(100.0),
        min_size: Some([200.0, 300.0]),
    },
    Placement {
        template: &MINI_ORION,
        x: Coord::Start(80.0),
        y: Coord::End(150.0),
        min_size: Some([0.0, 500.0]),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    static BROKEN: ConstellationTemplate = ConstellationTemplate {
        name: "Broken",
        points: &[[0.0, 0.0], [1.0, 1.0]],
        lines: &[[0, 1], [1, 2]],
    };

    #[test]
    fn out_of_range_line_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = ConstellationGroup::from_template(&BROKEN, Vec2::ZERO, Span::fixed(0.0), &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            TemplateError::LineOutOfRange {
                name: "Broken",
                line: [1, 2],
                points: 2
            }
        );
    }

    #[test]
    fn coords_resolve_against_extent() {
        assert_eq!(Coord::Start(50.0).resolve(800.0), 50.0);
        assert_eq!(Coord::End(200.0).resolve(800.0), 600.0);
        assert_eq!(Coord::Center(-10.0).resolve(800.0), 390.0);
    }

    #[test]
    fn sidebar_placements_are_size_gated() {
        let [ursa, orion] = [&SIDEBAR_PLACEMENTS[0], &SIDEBAR_PLACEMENTS[1]];
        let small = Bounds::new(180.0, 400.0);
        let tall = Bounds::new(260.0, 700.0);
        assert!(!ursa.is_visible(small));
        assert!(!orion.is_visible(small));
        assert!(ursa.is_visible(tall));
        assert!(orion.is_visible(tall));
    }
}

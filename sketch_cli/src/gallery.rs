//! Built-in example figures.

use sketch_core::prelude::*;

/// Figure names accepted by `beamsketch gallery`
pub const NAMES: [&str; 5] = ["simply-supported", "cantilever", "inclined", "vectors", "supports"];

/// Build a gallery figure by name
pub fn figure(name: &str) -> Option<Sheet> {
    let sheet = match name {
        "simply-supported" => simply_supported(),
        "cantilever" => cantilever(),
        "inclined" => inclined(),
        "vectors" => vectors(),
        "supports" => supports(),
        _ => return None,
    };
    Some(sheet)
}

fn sheet(title: &str) -> Sheet {
    Sheet::new(title, "beamsketch")
}

fn line(dash: Dash, color_code: char) -> LineFormat {
    LineFormat {
        dash,
        color_code: Some(color_code),
    }
}

/// Simply supported beam under a uniform load
pub fn simply_supported() -> Sheet {
    sheet("Simply supported beam")
        .with(Element::Beam {
            x1: 0.0,
            x2: 6.0,
            y1: 0.0,
            y2: 0.3,
            options: ElementOptions::default(),
        })
        .with(Element::Support {
            kind: SupportKind::Pinned,
            at: Point::new(0.0, 0.0),
            options: SupportOptions::labelled("A"),
        })
        .with(Element::Support {
            kind: SupportKind::Roller,
            at: Point::new(6.0, 0.0),
            options: SupportOptions::labelled("B"),
        })
        .with(Element::DistributedLoad {
            from: Point::new(0.0, 0.3),
            to: Point::new(6.0, 0.3),
            profile: LoadProfile::Uniform { magnitude: 1.0 },
            options: DistributedLoadOptions {
                arrows: 7,
                ..DistributedLoadOptions::labelled("q")
            },
        })
        .with(Element::Dimension {
            from: Point::new(0.0, 0.0),
            to: Point::new(6.0, 0.0),
            options: DimensionOptions {
                offset: -1.4,
                ..DimensionOptions::labelled("L")
            },
        })
        .with(Element::Axis {
            origin: Point::new(-1.5, 1.0),
            options: AxisOptions {
                scale: 0.5,
                ..AxisOptions::default()
            },
        })
}

/// Cantilever with a triangular load, a tip force and a tip moment
pub fn cantilever() -> Sheet {
    sheet("Cantilever")
        .with(Element::Support {
            kind: SupportKind::Fixed,
            at: Point::new(0.0, 0.15),
            options: SupportOptions {
                label_side: LabelSide::Left,
                ..SupportOptions::labelled("A")
            },
        })
        .with(Element::Beam {
            x1: 0.0,
            x2: 5.0,
            y1: 0.0,
            y2: 0.3,
            options: ElementOptions::default(),
        })
        .with(Element::Support {
            kind: SupportKind::Free,
            at: Point::new(5.0, 0.15),
            options: SupportOptions::labelled("B"),
        })
        .with(Element::DistributedLoad {
            from: Point::new(0.0, 0.3),
            to: Point::new(5.0, 0.3),
            profile: LoadProfile::Linear { start: 1.2, end: 0.0 },
            options: DistributedLoadOptions {
                arrows: 6,
                ..DistributedLoadOptions::labelled("q₀")
            },
        })
        .with(Element::Vector {
            from: Point::new(5.0, 2.0),
            to: Point::new(5.0, 0.3),
            options: VectorOptions {
                line: LineFormat::BLACK,
                offset: LabelOffset::Distance(0.3),
                ..VectorOptions::labelled("F")
            },
        })
        .with(Element::Moment {
            center: Point::new(5.0, 0.15),
            radius: 0.6,
            start: Degrees(-60.0),
            end: Degrees(200.0),
            options: MomentOptions::labelled("M"),
        })
        .with(Element::Dimension {
            from: Point::new(0.0, 0.0),
            to: Point::new(5.0, 0.0),
            options: DimensionOptions::labelled("L"),
        })
}

/// Inclined member on a pin and a rotated roller
pub fn inclined() -> Sheet {
    let base = Point::new(0.0, 0.0);
    let top = Point::new(4.0 * Degrees(30.0).cos(), 4.0 * Degrees(30.0).sin());

    sheet("Inclined member")
        .with(Element::Vector {
            from: base,
            to: top,
            options: VectorOptions {
                line: LineFormat::BLACK,
                width_pt: 3.0,
                arrow_scale: 0.0,
                show_label: false,
                show_legend: false,
                ..VectorOptions::default()
            },
        })
        .with(Element::Support {
            kind: SupportKind::Pinned,
            at: base,
            options: SupportOptions {
                scale: 0.6,
                ..SupportOptions::labelled("A")
            },
        })
        .with(Element::Support {
            kind: SupportKind::Roller,
            at: top,
            options: SupportOptions {
                scale: 0.6,
                rotation: Degrees(-30.0),
                ..SupportOptions::labelled("B")
            },
        })
        .with(Element::DistributedLoad {
            from: base,
            to: top,
            profile: LoadProfile::Uniform { magnitude: 0.8 },
            options: DistributedLoadOptions {
                arrows: 5,
                line: line(Dash::Solid, 'r'),
                ..DistributedLoadOptions::labelled("w")
            },
        })
        .with(Element::Dimension {
            from: base,
            to: top,
            options: DimensionOptions::labelled("4 m"),
        })
}

/// Force vectors with magnitude and angle annotations
pub fn vectors() -> Sheet {
    let origin = Point::origin();
    let mut sheet = sheet("Vectors").with(Element::Axis {
        origin,
        options: AxisOptions {
            scale: 3.0,
            ..AxisOptions::default()
        },
    });

    let specs: [(Point, &str, LineFormat); 4] = [
        (Point::new(2.0, 1.0), "F₁", line(Dash::Solid, 'b')),
        (Point::new(-1.0, 2.0), "F₂", line(Dash::Dashed, 'r')),
        (Point::new(-2.0, -1.5), "F₃", line(Dash::DashDot, 'g')),
        (Point::new(1.5, -2.0), "F₄", line(Dash::Dotted, 'm')),
    ];
    for (tip, label, format) in specs {
        sheet.add(Element::Vector {
            from: origin,
            to: tip,
            options: VectorOptions {
                line: format,
                show_magnitude: true,
                show_angle: true,
                aligned: true,
                arrow_scale: 0.08,
                offset: LabelOffset::Distance(0.3),
                ..VectorOptions::labelled(label)
            },
        });
    }

    sheet.add(Element::Vector {
        from: Point::new(-3.0, 2.5),
        to: Point::new(-1.5, 2.5),
        options: VectorOptions {
            line: LineFormat::BLACK,
            arrow_scale: 0.1,
            offset: LabelOffset::Direction(0.0, 0.3),
            show_legend: false,
            ..VectorOptions::labelled("offset label")
        },
    });
    sheet
}

/// Every support kind, side by side, plus a rotated variant
pub fn supports() -> Sheet {
    let mut sheet = sheet("Supports");
    for (i, kind) in SupportKind::ALL.into_iter().enumerate() {
        let at = Point::new(i as f64 * 2.0, 0.0);
        sheet.add(Element::Support {
            kind,
            at,
            options: SupportOptions::labelled(kind.display_name()),
        });
        sheet.add(Element::Beam {
            x1: at.x - 0.5,
            x2: at.x + 0.5,
            y1: at.y,
            y2: at.y + 0.1,
            options: ElementOptions {
                fill: false,
                ..ElementOptions::default()
            },
        });
    }
    sheet.add(Element::Support {
        kind: SupportKind::Roller,
        at: Point::new(9.0, 0.0),
        options: SupportOptions {
            rotation: Degrees(90.0),
            label_side: LabelSide::Left,
            ..SupportOptions::labelled("Roller 90°")
        },
    });
    sheet
}

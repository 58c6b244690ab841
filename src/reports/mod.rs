use ballforge::api::{BallReport, LaneSummary, Recommendation};
use ballforge::ball::Ball;
use ballforge::config::Thresholds;
use ballforge::inventory::Rejection;
use ballforge::lanes::{FrictionBand, LaneSurface};
use ballforge::quadrant::Quadrant;
use ballforge::scorer::ScoreDetails;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

fn band_color(band: FrictionBand) -> Color {
    match band {
        FrictionBand::High => Color::Red,
        FrictionBand::MediumHigh => Color::DarkYellow,
        FrictionBand::Medium => Color::Yellow,
        FrictionBand::Low => Color::Green,
    }
}

fn right_align(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_lane_summary(lane: &LaneSummary) {
    println!("\nLane Type: {}", lane.surface);
    println!("  Description: {}", lane.description);
    println!("  Effect on Ball Motion: {}", lane.effect);
    println!(
        "  Lane Friction Index: {:.2} ({})",
        lane.friction_index, lane.friction_band
    );
    println!("  Lane Condition: {}", lane.lane_condition);
}

pub fn print_arsenal(rec: &Recommendation) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Role").add_attribute(Attribute::Bold),
        Cell::new("Ball").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("RG"),
        Cell::new("Diff"),
        Cell::new("IntDiff"),
        Cell::new("Cover"),
        Cell::new("Quadrant"),
    ]);

    for p in &rec.picks {
        let name = if p.repeated {
            format!("{} (repeat)", p.ball.name)
        } else {
            p.ball.name.clone()
        };
        table.add_row(vec![
            Cell::new(p.label.as_str()).add_attribute(Attribute::Bold),
            Cell::new(name),
            Cell::new(format!("{:.2}", p.score)).fg(Color::Cyan),
            Cell::new(format!("{:.3}", p.ball.rg)),
            Cell::new(format!("{:.4}", p.ball.diff)),
            Cell::new(int_diff_cell(&p.ball)),
            Cell::new(cover_cell(&p.ball)),
            Cell::new(p.ball.quadrant.as_str()),
        ]);
    }
    right_align(&mut table, 2..=5);
    println!("\n{}", table);

    for p in &rec.picks {
        println!("{}: {}", p.role, p.ball.expected_roll);
    }
}

pub fn print_also_considered(balls: &[BallReport]) {
    if balls.is_empty() {
        return;
    }
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Also Considered").add_attribute(Attribute::Bold),
        Cell::new("Fresh"),
        Cell::new("Transition"),
        Cell::new("Burned"),
        Cell::new("Best").fg(Color::Cyan),
    ]);

    for b in balls {
        table.add_row(vec![
            Cell::new(b.name.as_str()),
            Cell::new(format!("{:.2}", b.scores.fresh)),
            Cell::new(format!("{:.2}", b.scores.transition)),
            Cell::new(format!("{:.2}", b.scores.burned)),
            Cell::new(format!("{:.2}", b.scores.best())).fg(Color::Cyan),
        ]);
    }
    right_align(&mut table, 1..=4);
    println!("\n{}", table);
}

pub fn print_score_details(name: &str, d: &ScoreDetails) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new(format!("{} [{}]", name, d.role)).add_attribute(Attribute::Bold),
        Cell::new("FricAdj"),
        Cell::new("RG"),
        Cell::new("Diff"),
        Cell::new("Asym"),
        Cell::new("Cond"),
        Cell::new("Speed"),
        Cell::new("Rev"),
        Cell::new("PAP"),
        Cell::new("Total").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new(""),
        Cell::new(format!("{:.3}", d.friction_adjustment)),
        Cell::new(format!("{:.2}", d.rg_term)),
        Cell::new(format!("{:.2}", d.diff_term)),
        Cell::new(format!("{:.2}", d.asym_term)),
        Cell::new(format!("{:.2}", d.condition_term)),
        Cell::new(format!("{:.2}", d.speed_term)),
        Cell::new(format!("{:.2}", d.rev_term)),
        Cell::new(format!("{:.2}", d.pap_term)),
        Cell::new(format!("{:.2}", d.total)).add_attribute(Attribute::Bold),
    ]);
    right_align(&mut table, 1..=9);
    println!("{}", table);
}

pub fn print_rejections(rejected: &[Rejection]) {
    if rejected.is_empty() {
        return;
    }
    println!("\n⚠️  {} row(s) skipped:", rejected.len());
    for r in rejected {
        println!(
            "   row {} ({}): {}",
            r.row,
            r.name.as_deref().unwrap_or("<unnamed>"),
            r.reason
        );
    }
}

pub fn print_quadrant_table(rows: &[(&Ball, Quadrant)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Ball").add_attribute(Attribute::Bold),
        Cell::new("RG"),
        Cell::new("Diff"),
        Cell::new("IntDiff"),
        Cell::new("Quadrant").fg(Color::Magenta),
        Cell::new("Ideal Conditions"),
    ]);
    for (ball, q) in rows {
        let int_diff = match ball.core.int_diff() {
            Some(v) => format!("{:.4}", v),
            None => "Symmetric".to_string(),
        };
        table.add_row(vec![
            Cell::new(ball.name.as_str()).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.3}", ball.rg)),
            Cell::new(format!("{:.4}", ball.diff)),
            Cell::new(int_diff),
            Cell::new(format!("{} [{}]", q.label(), q.symmetry)).fg(Color::Magenta),
            Cell::new(q.ideal_conditions()),
        ]);
    }
    right_align(&mut table, 1..=3);
    println!("\n{}", table);
}

pub fn print_surface_table(surfaces: &[LaneSurface], t: &Thresholds) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Surface").add_attribute(Attribute::Bold),
        Cell::new("SR"),
        Cell::new("Ra"),
        Cell::new("Index").fg(Color::Cyan),
        Cell::new("Band"),
        Cell::new("Rated"),
        Cell::new("Effect"),
    ]);
    for s in surfaces {
        let index = s.friction_index();
        let band = FrictionBand::from_index(index, t);
        table.add_row(vec![
            Cell::new(s.to_string()).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", s.sr())),
            Cell::new(format!("{:.2}", s.ra())),
            Cell::new(format!("{:.3}", index)).fg(Color::Cyan),
            Cell::new(band.to_string()).fg(band_color(band)),
            Cell::new(s.rated_friction()),
            Cell::new(s.effect()),
        ]);
    }
    right_align(&mut table, 1..=3);
    println!("\n{}", table);
}

fn int_diff_cell(b: &BallReport) -> String {
    match b.int_diff {
        Some(v) => format!("{:.4}", v),
        None => "Symmetric".to_string(),
    }
}

fn cover_cell(b: &BallReport) -> String {
    match &b.coverstock {
        Some(name) => format!("{} ({})", name, b.coverstock_type),
        None => b.coverstock_type.clone(),
    }
}

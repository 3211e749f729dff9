use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use fitcalc::InfoMessage;

pub fn summary(messages: &[InfoMessage]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Workout").add_attribute(Attribute::Bold),
        Cell::new("Duration (h)"),
        Cell::new("Distance (km)"),
        Cell::new("Speed (km/h)"),
        Cell::new("Calories").fg(Color::Red),
    ]);

    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for m in messages {
        table.add_row(vec![
            Cell::new(&m.training_type).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.3}", m.duration)),
            Cell::new(format!("{:.3}", m.distance)),
            Cell::new(format!("{:.3}", m.speed)),
            Cell::new(format!("{:.3}", m.calories)).fg(Color::Red),
        ]);
    }

    println!("{}", table);
}

//! Example: bind grid rows to typed records and export them back

use sheetbind::prelude::*;

#[derive(Default, Debug)]
struct Person {
    id: i64,
    name: String,
    age: i64,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Build an in-memory grid the way a file reader would
    let mut grid = SheetGrid::new("people");
    grid.set_value("A1", "id")?;
    grid.set_value("B1", "name")?;
    grid.set_value("C1", "age")?;

    grid.set_value("A2", 1.0)?;
    grid.set_value("B2", "Alice")?;
    grid.set_value("C2", 38.0)?;

    grid.set_value("A3", 2.0)?;
    grid.set_value("B3", "Bob")?;
    grid.set_value("C3", 24.0)?;

    // Read typed records
    let bindings = RecordBindings::<Person>::new()
        .bind("id", |p, v: i64| p.id = v)
        .bind("name", |p, v: String| p.name = v)
        .bind("age", |p, v: i64| p.age = v);

    let mut import = SheetImport::records(&grid, bindings);
    import.set_column_fields(&["id", "name", "age"])?;

    let people = import.read_rows()?;
    println!("Read {} people:", people.len());
    for person in people {
        println!("  #{} {} ({})", person.id, person.name, person.age);
    }

    // Read the same region as keyed maps, stopping after the first row
    let mut import = SheetImport::mappings(&grid);
    import.set_column_fields(&["id", "name", "age"])?;
    import.read_rows_while(|record, _, row, _| {
        println!("row {}: {:?}", row + 1, record.get("name"));
        false
    })?;

    // Render a summary grid with a merged header
    let mut out = SheetGrid::new("summary");
    let mut export = SheetExport::new(&mut out);
    export.set_titles(vec![
        vec![
            HeaderCell::new("id").with_row_span(2).with_text("ID"),
            HeaderCell::new("person").with_col_span(2).with_text("Person"),
        ],
        vec![
            HeaderCell::new("name").with_text("Name"),
            HeaderCell::new("age").with_text("Age"),
        ],
    ])?;

    let header_end = export.cursor().row();
    println!(
        "Summary header occupies rows 0..={}, {} merged regions",
        header_end,
        out.merged_regions().len()
    );
    Ok(())
}

use comfy_table::{Cell, Table};

use ledger_import::formats::ALL_FORMATS;

pub fn list() {
    let mut table = Table::new();
    table.set_header(vec!["Key", "Institution", "Expected Header"]);
    for format in ALL_FORMATS {
        table.add_row(vec![
            Cell::new(format.key()),
            Cell::new(format.name()),
            Cell::new(format.expected_header().join(",")),
        ]);
    }
    println!("Formats\n{table}");
}

use mkhelp_core::Format;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

#[derive(Debug, Serialize, Tabled)]
struct FormatRow {
    #[tabled(rename = "Format")]
    name: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
}

fn rows() -> Vec<FormatRow> {
    Format::ALL
        .iter()
        .map(|f| FormatRow { name: f.as_str(), description: f.description() })
        .collect()
}

pub fn run(json: bool) {
    let rows = rows();
    if json {
        match serde_json::to_string_pretty(&rows) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Error serializing formats: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{}", table);
}

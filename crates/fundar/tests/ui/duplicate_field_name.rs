#![allow(dead_code)]

use fundar::Record;

#[derive(Record)]
struct Row {
    kind: Option<String>,
    #[record(rename = "kind")]
    label: Option<String>,
}

fn main() {}

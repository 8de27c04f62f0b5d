#![allow(dead_code)]

use fundar::Record;

#[derive(Record)]
struct Point {
    x: i64,
}

fn main() {}

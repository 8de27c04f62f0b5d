use fundar::prelude::*;
use std::fmt;

///
/// Point
///

#[derive(Clone, PartialEq, Record)]
pub struct Point {
    pub x: Option<i64>,
    pub y: Option<i64>,
}

///
/// Coord
///
/// Same schema as `Point`, different type.
///

#[derive(Clone, PartialEq, Record)]
pub struct Coord {
    pub x: Option<i64>,
    pub y: Option<i64>,
}

///
/// Rect
///
/// Derived `area` is computed by the second constructor phase.
///

#[derive(Clone, PartialEq, Record)]
#[record(init = "Rect::compute_area")]
pub struct Rect {
    pub width: Option<u32>,
    pub height: Option<u32>,

    #[record(skip)]
    pub area: u64,
}

impl Rect {
    fn compute_area(&mut self) {
        self.area = u64::from(self.width.unwrap_or(0)) * u64::from(self.height.unwrap_or(0));
    }
}

///
/// Tag
///
/// Author-supplied representation.
///

#[derive(Clone, PartialEq, Record)]
#[record(custom_repr)]
pub struct Tag {
    pub label: Option<String>,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.label.as_deref().unwrap_or("?"))
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag<{}>", self.label.as_deref().unwrap_or("?"))
    }
}

///
/// Shape
///
/// Nested record and list fields.
///

#[derive(Clone, PartialEq, Record)]
pub struct Shape {
    pub name: Option<String>,
    pub origin: Option<Point>,
    pub tags: Option<Vec<String>>,
}

///
/// Row
///
/// Renamed schema field.
///

#[derive(Clone, PartialEq, Record)]
pub struct Row {
    #[record(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<u64>,
}

///
/// Wrapper
///

#[derive(Clone, PartialEq, Record)]
pub struct Wrapper<T> {
    pub inner: Option<T>,
}

///
/// Marker
///
/// No schema fields: the derive adds nothing.
///

#[derive(Debug, Default, Record)]
pub struct Marker {
    #[record(skip)]
    pub hits: u32,
}

///
/// Bag
///
/// Field types whose inner value can itself be null.
///

#[derive(Clone, PartialEq, Record)]
pub struct Bag {
    pub raw: Option<Value>,
    pub maybe: Option<Option<i64>>,
}

fn point(x: i64, y: i64) -> Point {
    Point::new(Some(x), Some(y))
}

///
/// TESTS
///

#[test]
fn fields_follow_declaration_order() {
    assert_eq!(Point::fields(), ["x", "y"]);
    assert_eq!(Shape::fields(), ["name", "origin", "tags"]);
    assert_eq!(Point::SCHEMA.name(), "Point");
    assert_eq!(Point::SCHEMA.get("x").map(|f| f.ty), Some("i64"));
    assert_eq!(Shape::SCHEMA.get("tags").map(|f| f.ty), Some("Vec<String>"));
}

#[test]
fn constructor_assigns_positionally() {
    let p = point(1, 2);

    assert_eq!(p.x, Some(1));
    assert_eq!(p.y, Some(2));
}

#[test]
fn construct_checks_arity() {
    let err = Point::construct(vec![Value::Int(1)]).expect_err("one value short");

    assert_eq!(
        err,
        RecordError::Arity {
            record: "Point",
            expected: 2,
            found: 1,
        }
    );

    let p = Point::construct(vec![Value::Int(1), Value::Null]).expect("two values");
    assert_eq!(p, Point::new(Some(1), None));
}

#[test]
fn construct_rejects_wrong_shapes() {
    let err = Point::construct(vec![Value::from("one"), Value::Int(2)]).expect_err("text");

    assert!(matches!(
        err,
        RecordError::InvalidValue {
            field: "x",
            expected: "i64",
            ..
        }
    ));
}

#[test]
fn init_hook_runs_after_field_assignment() {
    let rect = Rect::new(Some(3), Some(4));
    assert_eq!(rect.area, 12);

    // every construction path goes through both phases
    let rect = Rect::from_dict(&value_map! { "width" => 5, "height" => 2 }).expect("valid");
    assert_eq!(rect.area, 10);

    let rect = Rect::from_other(&rect, value_map! { "height" => 10 }).expect("valid");
    assert_eq!(rect.area, 50);
}

#[test]
fn skipped_fields_stay_out_of_the_schema() {
    let rect = Rect::new(Some(1), Some(1));

    assert_eq!(Rect::fields(), ["width", "height"]);
    assert!(!rect.to_dict().contains_key("area"));
    assert_eq!(rect.to_string(), "Rect(width=1, height=1)");
}

#[test]
fn round_trip_through_dict() {
    let p = point(3, -4);
    let back = Point::from_dict(&p.to_dict()).expect("round trip");

    assert!(back.equals(&p));
    assert_eq!(back, p);
}

#[test]
fn from_dict_never_fails_on_missing_keys() {
    let p = Point::from_dict(&ValueMap::new()).expect("empty mapping");

    assert_eq!(p, Point::new(None, None));
    assert!(p.not_null_fields().is_empty());
}

#[test]
fn diff_of_self_is_empty() {
    let p = point(1, 2);

    assert!(p.diff(&p).is_empty());
    assert!(p.equals(&p));
    assert!(p.equals(&point(1, 2)));
}

#[test]
fn diff_reports_changed_fields_in_order() {
    let a = point(1, 2);
    let b = point(1, 3);

    assert_eq!(a.diff(&b), ["y"]);
    assert!(!a.equals(&b));
    assert_eq!(a.diff(&point(0, 0)), ["x", "y"]);
}

#[test]
fn diff_against_unrelated_type_reports_every_field() {
    let a = point(1, 2);
    let c = Coord::new(Some(1), Some(2));

    assert_eq!(a.diff(&c), ["x", "y"]);
    assert!(!a.equals(&c));
    assert!(!a.equals(&42_u8));
}

#[test]
fn nested_records_compare_by_their_own_equality() {
    let a = Shape::new(Some("a".into()), Some(point(0, 0)), Some(vec!["x".into()]));
    let mut b = a.clone();
    assert!(a.equals(&b));

    b.origin = Some(point(0, 1));
    assert_eq!(a.diff(&b), ["origin"]);
}

#[test]
fn nested_records_convert_to_maps() {
    let shape = Shape::new(Some("s".into()), Some(point(1, 2)), None);
    let dict = shape.to_dict();

    assert_eq!(
        dict.get("origin"),
        Some(&Value::Map(value_map! { "x" => 1, "y" => 2 }))
    );
    assert_eq!(dict.get("tags"), Some(&Value::Null));

    let back = Shape::from_dict(&dict).expect("nested round trip");
    assert_eq!(back, shape);
}

#[test]
fn not_null_fields_is_computed_on_demand() {
    let mut p = Point::new(None, Some(2));
    assert_eq!(p.not_null_fields(), ["y"]);

    p.x = Some(1);
    assert_eq!(p.not_null_fields(), ["x", "y"]);
}

#[test]
fn default_repr_lists_fields_in_schema_order() {
    let shape = Shape::new(Some("s".into()), Some(point(1, 2)), Some(vec!["a".into()]));

    assert_eq!(point(1, 2).to_string(), "Point(x=1, y=2)");
    assert_eq!(format!("{:?}", point(1, 2)), "Point(x=1, y=2)");
    assert_eq!(
        shape.to_string(),
        r#"Shape(name="s", origin={"x": 1, "y": 2}, tags=["a"])"#
    );
}

#[test]
fn custom_repr_is_left_alone() {
    let tag = Tag::new(Some("red".into()));

    assert_eq!(tag.to_string(), "#red");
    assert_eq!(format!("{tag:?}"), "Tag<red>");
    assert_eq!(tag.to_dict().get("label"), Some(&Value::from("red")));
}

#[test]
fn renamed_fields_use_the_schema_name() {
    let row = Row::new(Some("user".into()), Some(7));

    assert_eq!(Row::fields(), ["type", "id"]);
    assert_eq!(row.to_dict().get("type"), Some(&Value::from("user")));
    assert_eq!(row.get_value("kind"), None);
    assert_eq!(row.to_string(), r#"Row(type="user", id=7)"#);

    let back = Row::from_dict(&value_map! { "type" => "admin" }).expect("valid");
    assert_eq!(back.kind.as_deref(), Some("admin"));
}

#[test]
fn generic_records_are_supported() {
    let w = Wrapper::new(Some(1.5_f64));

    assert_eq!(w.to_dict().get("inner"), Some(&Value::Float(1.5)));
    assert_eq!(Wrapper::<f64>::SCHEMA.get("inner").map(|f| f.ty), Some("T"));
    assert!(w.equals(&Wrapper::new(Some(1.5_f64))));
    assert!(!w.equals(&Wrapper::new(Some(1_i64))));
}

#[test]
fn set_value_assigns_and_validates() {
    let mut p = point(1, 2);
    p.set_value("x", Value::Int(9)).expect("fits");
    assert_eq!(p.x, Some(9));

    p.set_value("y", Value::Null).expect("null fits");
    assert_eq!(p.y, None);

    let err = p.set_value("z", Value::Int(1)).expect_err("unknown");
    assert!(matches!(err, RecordError::UnknownField { .. }));
}

#[test]
fn zero_field_declarations_are_passed_through() {
    let marker = Marker::default();

    assert_eq!(marker.hits, 0);
    assert_eq!(format!("{marker:?}"), "Marker { hits: 0 }");
}

#[test]
fn null_inside_some_is_stored_as_none() {
    let bag = Bag::new(Some(Value::Null), Some(None));

    assert_eq!(bag.raw, None);
    assert_eq!(bag.maybe, None);
    assert!(bag.not_null_fields().is_empty());

    let back = Bag::from_dict(&bag.to_dict()).expect("round trip");
    assert!(back.equals(&bag));
}

#[test]
fn null_checks_agree_with_the_dict_form() {
    let mut bag = Bag::new(Some(Value::Int(1)), Some(Some(2)));
    assert_eq!(bag.not_null_fields(), ["raw", "maybe"]);

    // direct assignment can still wrap a null
    bag.raw = Some(Value::Null);
    bag.maybe = Some(None);

    let dict = bag.to_dict();
    for field in Bag::fields() {
        assert_eq!(bag.is_null(field), dict.get(field).map(Value::is_null));
    }
    assert!(bag.not_null_fields().is_empty());
}

#[test]
fn equals_needs_the_record_itself_not_a_wrapper() {
    let p = point(1, 2);
    let boxed = Box::new(p.clone());

    assert!(!p.equals(&boxed));
    assert!(p.equals(&*boxed));
    assert!(p.equals_record(&boxed));
}

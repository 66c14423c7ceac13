//! Instance methods driven through `call_method`, including aliases.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use int64_host::{call_method, ErrorKind, HostValue, Int64, Int64Result, Method};
use pretty_assertions::assert_eq;

fn parse(text: &str) -> Int64 {
    text.parse().expect("valid integer literal")
}

fn run(receiver: &str, name: &str, args: &[HostValue]) -> Int64Result<HostValue> {
    call_method(parse(receiver), name, args)
}

/// Call a method that returns an integer and render it in decimal.
fn eval(receiver: &str, name: &str, args: &[HostValue]) -> String {
    match run(receiver, name, args).unwrap() {
        HostValue::Integer(n) => n.to_string(),
        other => panic!("{name} returned {other}"),
    }
}

fn kind(receiver: &str, name: &str, args: &[HostValue]) -> Option<ErrorKind> {
    run(receiver, name, args).err().map(|e| e.kind())
}

fn num(value: f64) -> HostValue {
    HostValue::number(value)
}

fn text(value: &str) -> HostValue {
    HostValue::from(value)
}

fn int(value: i64) -> HostValue {
    HostValue::integer(value)
}

/// Host values no binary operator accepts.
fn rejected_operands() -> Vec<HostValue> {
    vec![
        HostValue::Undefined,
        HostValue::Null,
        HostValue::object("String"),
        HostValue::object("Number"),
        HostValue::Array(vec![]),
        HostValue::object("Object"),
        HostValue::object("Integer"),
    ]
}

const MAX: &str = "9223372036854775807";
const MIN: &str = "-9223372036854775808";

// -- Arithmetic --

#[test]
fn arithmetic_results() {
    assert_eq!(eval("21", "add", &[text("400")]), "421");
    assert_eq!(eval("3", "add", &[int(-211)]), "-208");
    assert_eq!(eval(MAX, "add", &[num(-1.0)]), "9223372036854775806");
    assert_eq!(eval(MIN, "add", &[num(1.0)]), "-9223372036854775807");

    assert_eq!(eval("21", "subtract", &[text("400")]), "-379");
    assert_eq!(eval("3", "subtract", &[int(-211)]), "214");
    assert_eq!(eval(MIN, "subtract", &[num(-1.0)]), "-9223372036854775807");

    assert_eq!(eval("21", "multiply", &[text("400")]), "8400");
    assert_eq!(eval("3", "multiply", &[int(-211)]), "-633");
    assert_eq!(eval("4611686018427387904", "multiply", &[num(-2.0)]), MIN);

    assert_eq!(eval("400", "divide", &[text("21")]), "19");
    assert_eq!(eval("-211", "divide", &[int(3)]), "-70");
    assert_eq!(eval(MIN, "divide", &[num(2.0)]), "-4611686018427387904");

    assert_eq!(eval("400", "modulo", &[text("22")]), "4");
    assert_eq!(eval("-211", "modulo", &[int(3)]), "-1");
    assert_eq!(eval(MAX, "modulo", &[num(481_908_120.0)]), "68418967");
    assert_eq!(eval(MIN, "modulo", &[num(481_908_120.0)]), "-68418968");
    assert_eq!(eval(MIN, "modulo", &[num(-1.0)]), "0");

    assert_eq!(eval("400", "negate", &[]), "-400");
    assert_eq!(eval("-9223372036854775807", "negate", &[]), MAX);
    assert_eq!(eval("-211", "abs", &[]), "211");
    assert_eq!(eval("-9223372036854775807", "abs", &[]), MAX);
}

#[test]
fn arithmetic_overflow_is_range_error() {
    let range = Some(ErrorKind::Range);
    assert_eq!(kind(MAX, "add", &[num(1.0)]), range);
    assert_eq!(kind(MIN, "add", &[num(-1.0)]), range);
    assert_eq!(kind(MAX, "subtract", &[num(-1.0)]), range);
    assert_eq!(kind(MIN, "subtract", &[num(1.0)]), range);
    assert_eq!(kind("4611686018427387904", "multiply", &[num(2.0)]), range);
    assert_eq!(kind("4611686018427387905", "multiply", &[num(-2.0)]), range);
    assert_eq!(kind("-4611686018427387904", "multiply", &[num(-2.0)]), range);
    assert_eq!(kind("-4611686018427387905", "multiply", &[num(2.0)]), range);
    assert_eq!(kind("123", "divide", &[num(0.0)]), range);
    assert_eq!(kind(MIN, "divide", &[num(-1.0)]), range);
    assert_eq!(kind("123", "modulo", &[num(0.0)]), range);
    assert_eq!(kind(MIN, "negate", &[]), range);
    assert_eq!(kind(MIN, "abs", &[]), range);
}

#[test]
fn binary_operators_reject_bad_operands() {
    let methods = ["add", "subtract", "multiply", "divide", "modulo", "and", "or", "xor"];
    for method in methods {
        assert_eq!(kind("1", method, &[]), Some(ErrorKind::Type), "{method}()");
        for operand in rejected_operands() {
            assert_eq!(
                kind("1", method, &[operand.clone()]),
                Some(ErrorKind::Type),
                "{method}({operand})"
            );
        }
    }
}

// -- Bitwise --

#[test]
fn bitwise_results() {
    assert_eq!(eval("0", "and", &[int(4)]), "0");
    assert_eq!(eval("5382", "and", &[text("1588")]), "1028");
    assert_eq!(eval("-1", "and", &[num(283_421.0)]), "283421");
    assert_eq!(eval("0", "or", &[int(4)]), "4");
    assert_eq!(eval("5382", "or", &[text("1588")]), "5942");
    assert_eq!(eval("-1", "or", &[num(283_421.0)]), "-1");
    assert_eq!(eval("0", "xor", &[int(4)]), "4");
    assert_eq!(eval("5382", "xor", &[text("1588")]), "4914");
    assert_eq!(eval("-1", "xor", &[num(283_421.0)]), "-283422");
    assert_eq!(eval("0", "not", &[]), "-1");
    assert_eq!(eval("5382", "not", &[]), "-5383");
    assert_eq!(eval("-1", "not", &[]), "0");
}

#[test]
fn shift_results() {
    assert_eq!(eval("0", "shiftLeft", &[num(4.0)]), "0");
    assert_eq!(eval("3", "shiftLeft", &[num(1588.0)]), "13510798882111488");
    assert_eq!(eval("-1", "shiftLeft", &[num(7.0)]), "-128");
    assert_eq!(eval(MAX, "shiftLeft", &[num(5.0)]), "-32");
    assert_eq!(eval("0", "shiftRight", &[num(4.0)]), "0");
    assert_eq!(eval("3452342", "shiftRight", &[num(706.0)]), "863085");
    assert_eq!(eval("-1", "shiftRight", &[num(7.0)]), "-1");
    assert_eq!(eval(MAX, "shiftRight", &[num(5.0)]), "288230376151711743");
}

#[test]
fn shift_counts_reject_everything_but_uint32() {
    let bad_counts = [
        HostValue::Undefined,
        HostValue::Null,
        text("1"),
        HostValue::object("Number"),
        HostValue::Array(vec![]),
        int(1),
        num(-1.0),
        num(4_294_967_296.0),
    ];
    for method in ["shiftLeft", "shiftRight"] {
        assert_eq!(kind("1", method, &[]), Some(ErrorKind::Type), "{method}()");
        for count in &bad_counts {
            assert_eq!(
                kind("1", method, std::slice::from_ref(count)),
                Some(ErrorKind::Type),
                "{method}({count})"
            );
        }
    }
}

// -- Conversion --

#[test]
fn to_string_in_each_radix() {
    let bases: [(f64, [&str; 3]); 5] = [
        (
            2.0,
            [
                "1111011",
                "111111111111111111111111111111111111111111111111111111111111111",
                "-1000000000000000000000000000000000000000000000000000000000000000",
            ],
        ),
        (
            5.0,
            [
                "443",
                "1104332401304422434310311212",
                "-1104332401304422434310311213",
            ],
        ),
        (10.0, ["123", MAX, MIN]),
        (16.0, ["7b", "7fffffffffffffff", "-8000000000000000"]),
        (36.0, ["3f", "1y2p0ij32e8e7", "-1y2p0ij32e8e8"]),
    ];
    for (radix, [small, max, min]) in bases {
        let args = [num(radix)];
        for (receiver, expected) in [
            ("0", "0"),
            ("1", "1"),
            ("-1", "-1"),
            ("  \n123.000  \t", small),
            (MAX, max),
            (MIN, min),
        ] {
            assert_eq!(
                run(receiver, "toString", &args),
                Ok(text(expected)),
                "{receiver:?} in base {radix}"
            );
        }
    }
    assert_eq!(run(MIN, "toString", &[]), Ok(text(MIN)));
}

#[test]
fn to_string_radix_errors() {
    for radix in [0.0, 1.0, 37.0, 4_294_967_295.0] {
        assert_eq!(kind("0", "toString", &[num(radix)]), Some(ErrorKind::Range), "{radix}");
    }
    let bad = [
        num(-1.0),
        num(-2.0),
        num(-36.0),
        num(4_294_967_296.0),
        HostValue::object("Number"),
        int(10),
        text("10"),
        HostValue::object("Object"),
        HostValue::Array(vec![]),
        HostValue::Null,
        HostValue::Undefined,
    ];
    for radix in bad {
        assert_eq!(
            kind("0", "toString", std::slice::from_ref(&radix)),
            Some(ErrorKind::Type),
            "{radix}"
        );
    }
}

#[test]
fn to_number_within_safe_range() {
    for value in ["123", "0", "-1", "9007199254740991", "-9007199254740991"] {
        let expected: f64 = value.parse().expect("float literal");
        assert_eq!(run(value, "toNumber", &[]), Ok(num(expected)));
        assert_eq!(run(value, "valueOf", &[]), Ok(num(expected)));
    }
    assert_eq!(kind("9007199254740992", "toNumber", &[]), Some(ErrorKind::Range));
    assert_eq!(kind("-9007199254740992", "valueOf", &[]), Some(ErrorKind::Range));
}

// -- Aliases --

#[test]
fn aliases_behave_like_their_method() {
    let receivers = ["-7", "0", "12", MAX, MIN];
    let operands = [num(3.0), text("-2"), int(0)];
    let count = [num(3.0)];
    for (name, method) in Method::names() {
        for receiver in receivers {
            let args: &[HostValue] = match method {
                Method::ShiftLeft | Method::ShiftRight => &count,
                _ => &operands,
            };
            assert_eq!(
                run(receiver, name, args),
                run(receiver, method.name(), args),
                "{name} on {receiver}"
            );
        }
    }
}

#[test]
fn alias_spot_checks() {
    assert_eq!(eval("2", "plus", &[num(3.0)]), "5");
    assert_eq!(eval("2", "minus", &[num(3.0)]), "-1");
    assert_eq!(eval("2", "times", &[num(3.0)]), "6");
    assert_eq!(eval("7", "over", &[num(2.0)]), "3");
    assert_eq!(eval("7", "mod", &[num(2.0)]), "1");
    assert_eq!(eval("7", "neg", &[]), "-7");
    assert_eq!(eval("-7", "absoluteValue", &[]), "7");
    assert_eq!(eval("1", "shl", &[num(3.0)]), "8");
    assert_eq!(run("1", "isEqualTo", &[text("1")]), Ok(HostValue::Bool(true)));
    assert_eq!(run("1", "isLessThanOrEqualTo", &[num(0.0)]), Ok(HostValue::Bool(false)));
    assert_eq!(run("0", "isNotZero", &[]), Ok(HostValue::Bool(false)));
}

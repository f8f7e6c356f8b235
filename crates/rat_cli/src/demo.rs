//! Built-in example checks for `rat demo`. Every check should print `true`.

use rat_core::prelude::*;

use crate::output::{DemoCheck, DemoOutput};

type Check = fn() -> RationalResult<bool>;

fn q(s: &str) -> RationalResult<Rational> {
    s.parse()
}

fn equal_after_reduction() -> RationalResult<bool> {
    Ok(1i32.div_by(2)? == 2_000_000_000i64.div_by(4_000_000_000)?)
}

fn integer_collapse() -> RationalResult<bool> {
    Ok(2i32.div_by(1)?.to_string() == "2")
}

fn sign_moves_to_numerator() -> RationalResult<bool> {
    Ok((-2i32).div_by(4)?.to_string() == "-1/2")
}

fn parse_reduces() -> RationalResult<bool> {
    Ok(q("117/1098")?.to_string() == "13/122")
}

fn subtraction() -> RationalResult<bool> {
    Ok(q("1/2")?.subtract(&q("1/3")?) == q("1/6")?)
}

fn addition() -> RationalResult<bool> {
    Ok(q("1/2")?.add(&q("1/3")?) == q("5/6")?)
}

fn negation() -> RationalResult<bool> {
    Ok(1i32.div_by(2)?.negate() == (-1i32).div_by(2)?)
}

fn multiplication() -> RationalResult<bool> {
    Ok(1i32.div_by(2)?.multiply(&1i32.div_by(3)?) == q("1/6")?)
}

fn division() -> RationalResult<bool> {
    Ok(1i32.div_by(2)?.divide(&1i32.div_by(4)?)? == q("2")?)
}

fn ordering() -> RationalResult<bool> {
    Ok(1i32.div_by(2)? < 2i32.div_by(3)?)
}

fn range_membership() -> RationalResult<bool> {
    let range = 1i32.div_by(3)?.range_to(&2i32.div_by(3)?);
    Ok(range.contains(&1i32.div_by(2)?))
}

fn large_magnitudes() -> RationalResult<bool> {
    let n: BigInt = "912016490186296920119201192141970416029"
        .parse()
        .map_err(|_| RationalError::ParseError { input: "numerator".into(), reason: "bad literal" })?;
    let d: BigInt = "1824032980372593840238402384283940832058"
        .parse()
        .map_err(|_| RationalError::ParseError { input: "denominator".into(), reason: "bad literal" })?;
    Ok(n.div_by(d)? == 1i32.div_by(2)?)
}

const CHECKS: &[(&str, Check)] = &[
    ("1/2 == 2000000000/4000000000", equal_after_reduction),
    ("2/1 prints as 2", integer_collapse),
    ("-2/4 prints as -1/2", sign_moves_to_numerator),
    ("\"117/1098\" parses to 13/122", parse_reduces),
    ("1/2 - 1/3 == 1/6", subtraction),
    ("1/2 + 1/3 == 5/6", addition),
    ("-(1/2) == -1/2", negation),
    ("1/2 * 1/3 == 1/6", multiplication),
    ("(1/2) / (1/4) == 2", division),
    ("1/2 < 2/3", ordering),
    ("1/2 in [1/3, 2/3]", range_membership),
    ("large fraction == 1/2", large_magnitudes),
];

/// Run every check in order. An arithmetic error aborts the run.
pub fn run_demo() -> RationalResult<DemoOutput> {
    let mut checks = Vec::with_capacity(CHECKS.len());
    for (name, check) in CHECKS {
        let pass = check()?;
        tracing::info!(check = *name, pass, "demo check");
        checks.push(DemoCheck { name: *name, pass });
    }
    let pass = checks.iter().all(|c| c.pass);
    Ok(DemoOutput { checks, pass })
}

//! Allow-list entry validation (properties, at-rules, pseudo-classes).

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::GuardSettings;

use super::helpers::validate_entries;

static PROPERTY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-{0,2}[a-z][a-z0-9-]*$").unwrap());

static AT_RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@-?[a-z][a-z0-9-]*$").unwrap());

static PSEUDO_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^::?-?[a-z][a-z0-9-]*$").unwrap());

pub(crate) fn validate_allow(errors: &mut Vec<String>, settings: &GuardSettings) {
    let allow = &settings.allow;
    validate_entries(
        errors,
        "allow.properties",
        &allow.properties,
        &PROPERTY_RE,
        "a lowercase property name",
    );
    validate_entries(
        errors,
        "allow.at_rules",
        &allow.at_rules,
        &AT_RULE_RE,
        "an at-rule keyword starting with '@'",
    );
    validate_entries(
        errors,
        "allow.pseudo_classes",
        &allow.pseudo_classes,
        &PSEUDO_CLASS_RE,
        "a pseudo-class starting with ':'",
    );
}

//! Canonical CSV shapes for the three accepted input files, printed by the
//! CLI `template` subcommand.

pub const CRITERIA_TEMPLATE: &str = "\
name,weight,attribute
Performance,0.25,benefit
Scalability,0.25,benefit
Learning Curve,0.25,cost
Maintenance,0.25,cost
";

pub const CRITERIA_GUIDE: &str = "\
name       unique criterion name
weight     share in (0, 1]; all weights together must sum to 1.0
attribute  'benefit' (higher is better) or 'cost' (lower is better)";

pub const DATA_TEMPLATE: &str = "\
framework,description,Performance (req/s),Scalability (1-5),Learning Curve (hours),Maintenance (updates/yr)
Actix,Rust actor-based web framework,8500,4,60,12
Axum,Tokio-native web framework,8200,4,40,10
";

pub const DATA_GUIDE: &str = "\
framework    candidate name (required)
description  free text (optional column)
<criterion>  one column per registered criterion; a unit suffix in
             parentheses is allowed, e.g. 'Performance (req/s)'.
             Blank cells are treated as no recorded score.";

pub const SCORES_TEMPLATE: &str = "\
framework,criteria,value
Actix,Performance,8500
Axum,Performance,8200
";

pub const SCORES_GUIDE: &str = "\
framework  must match a framework from the data file
criteria   must match a registered criterion name
value      numeric score; replaces any earlier value for the pair";

mod provenance;

use anyhow::{bail, ensure, Context, Result};
use clap::{Parser, Subcommand};
use orthkit::prelude::*;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

use provenance::Payload;

/// Largest dimension for which the CLI materializes sign tables (2^20 rows).
/// `count` alone accepts up to `MAX_DIMS`.
const MAX_TABLE_DIMS: usize = 20;

#[derive(Parser)]
#[command(name = "orthkit-cli")]
#[command(about = "Orthant signs, combinations, and point utilities")]
struct Cmd {
    /// Write the JSON result to this file (plus a provenance sidecar) instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Sign vector of one orthant
    Sign {
        #[arg(long)]
        dims: usize,
        #[arg(long)]
        orthant: usize,
    },
    /// Sign vectors of every orthant, in orthant order
    Signs {
        #[arg(long)]
        dims: usize,
    },
    /// Number of orthants (2^dims)
    Count {
        #[arg(long)]
        dims: usize,
    },
    /// Cartesian product of comma-separated lists
    Combos {
        /// One list per flag, e.g. `--list a,b --list x,y`
        #[arg(long = "list", required = true)]
        lists: Vec<String>,
    },
    /// Mirror a point into an orthant around an origin
    ToOrthant {
        #[arg(long)]
        point: String,
        #[arg(long)]
        origin: String,
        #[arg(long, default_value_t = 1)]
        orthant: usize,
    },
    /// Great-circle distance in metres between two `lat,lon` pairs
    Haversine {
        #[arg(long, allow_hyphen_values = true)]
        from: String,
        #[arg(long, allow_hyphen_values = true)]
        to: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct SignRow {
    orthant: usize,
    sign: Vec<f64>,
}

/// Result of one subcommand: its name, echoed params, and the JSON body.
#[derive(Debug)]
struct Outcome {
    command: &'static str,
    params: Value,
    result: Value,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let points = Points::new();
    let outcome = execute(&cmd.action, &points)?;
    emit(cmd.out.as_deref(), outcome)
}

fn execute(action: &Action, points: &Points) -> Result<Outcome> {
    tracing::info!(?action, "run");
    let catalog = points.catalog();
    let outcome = match action {
        Action::Sign { dims, orthant } => {
            let dims = check_table_dims(*dims)?;
            let count = catalog.orthant_count(dims);
            ensure!(
                (1..=count).contains(orthant),
                "orthant must be in 1..={count} for {dims} dims, got {orthant}"
            );
            let sign = catalog.orthant_sign(dims, *orthant);
            Outcome {
                command: "sign",
                params: json!({ "dims": dims, "orthant": orthant }),
                result: json!({ "dims": dims, "orthant": orthant, "sign": sign.coords() }),
            }
        }
        Action::Signs { dims } => {
            let dims = check_table_dims(*dims)?;
            let rows: Vec<SignRow> = catalog
                .all_orthant_signs(dims)
                .into_iter()
                .enumerate()
                .map(|(i, sign)| SignRow {
                    orthant: i + 1,
                    sign: sign.to_vec(),
                })
                .collect();
            tracing::info!(dims, orthants = rows.len(), "signs");
            Outcome {
                command: "signs",
                params: json!({ "dims": dims }),
                result: serde_json::to_value(rows)?,
            }
        }
        Action::Count { dims } => {
            let dims = check_dims(*dims)?;
            Outcome {
                command: "count",
                params: json!({ "dims": dims }),
                result: json!({ "dims": dims, "count": catalog.orthant_count(dims) }),
            }
        }
        Action::Combos { lists } => {
            let parsed: Vec<Vec<String>> = lists
                .iter()
                .map(|l| {
                    l.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .collect();
            let combos = ListCombinations::new(parsed.clone()).context("building combinations")?;
            let total = combos.len_total();
            let all: Vec<Vec<String>> = combos.collect();
            tracing::info!(lists = parsed.len(), total, "combos");
            Outcome {
                command: "combos",
                params: json!({ "lists": parsed }),
                result: json!(all),
            }
        }
        Action::ToOrthant {
            point,
            origin,
            orthant,
        } => {
            let p = parse_point(point).context("parsing --point")?;
            let o = parse_point(origin).context("parsing --origin")?;
            ensure!(
                p.dims() == o.dims(),
                "point has {} dims but origin has {}",
                p.dims(),
                o.dims()
            );
            let dims = check_table_dims(p.dims())?;
            let count = catalog.orthant_count(dims);
            ensure!(
                (1..=count).contains(orthant),
                "orthant must be in 1..={count} for {dims} dims, got {orthant}"
            );
            let q = points.to_orthant(&p, &o, *orthant);
            Outcome {
                command: "to-orthant",
                params: json!({ "point": p.coords(), "origin": o.coords(), "orthant": orthant }),
                result: json!({ "point": q.coords() }),
            }
        }
        Action::Haversine { from, to } => {
            let (lat1, lon1) = parse_lat_lon(from).context("parsing --from")?;
            let (lat2, lon2) = parse_lat_lon(to).context("parsing --to")?;
            let metres = haversine_distance(lat1, lon1, lat2, lon2);
            Outcome {
                command: "haversine",
                params: json!({ "from": [lat1, lon1], "to": [lat2, lon2] }),
                result: json!({ "metres": metres }),
            }
        }
        Action::Report => Outcome {
            command: "report",
            params: json!({}),
            result: json!({
                "code_rev": provenance::current_git_rev(),
                "orthkit_version": orthkit::VERSION,
                "max_dims": MAX_DIMS,
                "cached_dims": catalog.cached_dims(),
            }),
        },
    };
    Ok(outcome)
}

fn emit(out: Option<&Path>, outcome: Outcome) -> Result<()> {
    let body = serde_json::to_string_pretty(&outcome.result)?;
    let Some(out_path) = out else {
        println!("{body}");
        return Ok(());
    };
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, body).with_context(|| format!("writing {}", out_path.display()))?;
    provenance::write_sidecar(out_path, Payload::new(outcome.command, outcome.params))?;
    Ok(())
}

fn check_dims(dims: usize) -> Result<usize> {
    ensure!(
        (1..=MAX_DIMS).contains(&dims),
        "dims must be in 1..={MAX_DIMS}, got {dims}"
    );
    Ok(dims)
}

/// Sign lookups fill the whole `2^dims` table, so they get a tighter bound.
fn check_table_dims(dims: usize) -> Result<usize> {
    let dims = check_dims(dims)?;
    ensure!(
        dims <= MAX_TABLE_DIMS,
        "sign tables are limited to {MAX_TABLE_DIMS} dims, got {dims}"
    );
    Ok(dims)
}

fn parse_coords(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|c| {
            c.trim()
                .parse::<f64>()
                .with_context(|| format!("invalid coordinate {c:?}"))
        })
        .collect()
}

fn parse_point(s: &str) -> Result<Point> {
    let coords = parse_coords(s)?;
    ensure!(!coords.is_empty(), "a point needs at least one coordinate");
    Ok(Point::new(coords))
}

fn parse_lat_lon(s: &str) -> Result<(f64, f64)> {
    match parse_coords(s)?.as_slice() {
        &[lat, lon] => Ok((lat, lon)),
        other => bail!("expected `lat,lon`, got {} values", other.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sign_reports_quadrant_three() {
        let out = execute(&Action::Sign { dims: 2, orthant: 3 }, &Points::new()).unwrap();
        assert_eq!(out.result["sign"], json!([-1.0, -1.0]));
    }

    #[test]
    fn sign_rejects_out_of_range() {
        let err = execute(&Action::Sign { dims: 2, orthant: 5 }, &Points::new()).unwrap_err();
        assert!(err.to_string().contains("1..=4"));
        assert!(execute(&Action::Count { dims: 0 }, &Points::new()).is_err());
        assert!(execute(&Action::Count { dims: 31 }, &Points::new()).is_err());
    }

    #[test]
    fn sign_tables_are_bounded() {
        let err = execute(&Action::Sign { dims: 30, orthant: 1 }, &Points::new()).unwrap_err();
        assert!(err.to_string().contains("limited to 20 dims"));
        assert!(execute(&Action::Signs { dims: 21 }, &Points::new()).is_err());
        let out = execute(&Action::Count { dims: 30 }, &Points::new()).unwrap();
        assert_eq!(out.result["count"], 1u64 << 30);
    }

    #[test]
    fn signs_lists_every_orthant() {
        let out = execute(&Action::Signs { dims: 3 }, &Points::new()).unwrap();
        let rows = out.result.as_array().unwrap();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0]["orthant"], 1);
        assert_eq!(rows[0]["sign"], json!([1.0, 1.0, 1.0]));
    }

    #[test]
    fn combos_expand_product() {
        let action = Action::Combos {
            lists: vec!["1,2".into(), "3, 4".into()],
        };
        let out = execute(&action, &Points::new()).unwrap();
        assert_eq!(out.result.as_array().unwrap().len(), 4);
        let empty = Action::Combos {
            lists: vec!["a".into(), " , ".into()],
        };
        let err = execute(&empty, &Points::new()).unwrap_err();
        assert!(format!("{err:#}").contains("input list 1 is empty"));
    }

    #[test]
    fn to_orthant_and_haversine() {
        let action = Action::ToOrthant {
            point: "1,4".into(),
            origin: "2,2".into(),
            orthant: 3,
        };
        let out = execute(&action, &Points::new()).unwrap();
        assert_eq!(out.result["point"], json!([1.0, 0.0]));
        let mismatch = Action::ToOrthant {
            point: "1".into(),
            origin: "2,2".into(),
            orthant: 1,
        };
        assert!(execute(&mismatch, &Points::new()).is_err());
        let h = Action::Haversine {
            from: "0,0".into(),
            to: "0,0".into(),
        };
        let out = execute(&h, &Points::new()).unwrap();
        assert_eq!(out.result["metres"], json!(0.0));
        assert!(parse_lat_lon("1,2,3").is_err());
        assert!(parse_point("1,x").is_err());
    }

    #[test]
    fn emit_writes_artifact_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("count.json");
        let outcome = execute(&Action::Count { dims: 4 }, &Points::new()).unwrap();
        emit(Some(&out), outcome).unwrap();
        let body: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(body["count"], 16);
        assert!(dir
            .path()
            .join("nested")
            .join("count.provenance.json")
            .exists());
    }
}

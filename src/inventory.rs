use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::ball::{Ball, Core, Coverstock};
use crate::error::{BallForgeError, BfResult};

/// One raw row of the inventory file. Everything is text so a bad cell
/// rejects its row instead of the whole file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BallRow {
    /// 1-based data row in the source file, counting skipped blank rows.
    /// `from_rows` falls back to the row's position when this is unset.
    #[serde(default)]
    pub row: Option<usize>,
    pub name: Option<String>,
    pub rg: Option<String>,
    pub diff: Option<String>,
    pub int_diff: Option<String>,
    pub coverstock: Option<String>,
    pub coverstock_type: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectReason {
    MissingName,
    MissingRg,
    MissingDiff,
    NonNumericRg { value: String },
    NonNumericDiff { value: String },
    DuplicateName,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "missing Name"),
            Self::MissingRg => write!(f, "missing RG"),
            Self::MissingDiff => write!(f, "missing Diff"),
            Self::NonNumericRg { value } => write!(f, "RG '{}' is not a number", value),
            Self::NonNumericDiff { value } => write!(f, "Diff '{}' is not a number", value),
            Self::DuplicateName => write!(f, "duplicate Name"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rejection {
    /// 1-based data row (header excluded).
    pub row: usize,
    pub name: Option<String>,
    pub reason: RejectReason,
}

/// Scorable balls in input order, plus the rows that were filtered out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub balls: Vec<Ball>,
    pub rejected: Vec<Rejection>,
}

impl Inventory {
    pub fn from_balls(balls: Vec<Ball>) -> Self {
        let mut inventory = Self::default();
        let mut seen = HashSet::new();
        for (i, ball) in balls.into_iter().enumerate() {
            let reason = if !ball.rg.is_finite() {
                Some(RejectReason::NonNumericRg {
                    value: ball.rg.to_string(),
                })
            } else if !ball.diff.is_finite() {
                Some(RejectReason::NonNumericDiff {
                    value: ball.diff.to_string(),
                })
            } else if !seen.insert(ball.name.clone()) {
                Some(RejectReason::DuplicateName)
            } else {
                None
            };
            match reason {
                Some(reason) => inventory.reject(i + 1, Some(ball.name), reason),
                None => inventory.balls.push(ball),
            }
        }
        inventory
    }

    pub fn from_rows(rows: Vec<BallRow>) -> Self {
        let mut inventory = Self::default();
        let mut seen = HashSet::new();

        for (i, row) in rows.into_iter().enumerate() {
            let row_no = row.row.unwrap_or(i + 1);
            match ball_from_row(row) {
                Ok(ball) => {
                    if seen.insert(ball.name.clone()) {
                        inventory.balls.push(ball);
                    } else {
                        inventory.reject(row_no, Some(ball.name), RejectReason::DuplicateName);
                    }
                }
                Err((name, reason)) => inventory.reject(row_no, name, reason),
            }
        }

        info!(
            "Inventory: {} scorable balls, {} rejected rows",
            inventory.balls.len(),
            inventory.rejected.len()
        );
        inventory
    }

    fn reject(&mut self, row: usize, name: Option<String>, reason: RejectReason) {
        warn!(
            "Skipping row {} ({}): {}",
            row,
            name.as_deref().unwrap_or("<unnamed>"),
            reason
        );
        self.rejected.push(Rejection { row, name, reason });
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&Ball> {
        self.balls.iter().find(|b| b.name == name)
    }
}

fn non_empty(cell: Option<String>) -> Option<String> {
    cell.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn ball_from_row(row: BallRow) -> Result<Ball, (Option<String>, RejectReason)> {
    let Some(name) = non_empty(row.name) else {
        return Err((None, RejectReason::MissingName));
    };

    let rg = match non_empty(row.rg) {
        None => return Err((Some(name), RejectReason::MissingRg)),
        Some(s) => match s.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => return Err((Some(name), RejectReason::NonNumericRg { value: s })),
        },
    };

    let diff = match non_empty(row.diff) {
        None => return Err((Some(name), RejectReason::MissingDiff)),
        Some(s) => match s.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => return Err((Some(name), RejectReason::NonNumericDiff { value: s })),
        },
    };

    // Legacy files mark symmetric cores with text such as "Symmetrical Ball".
    let int_diff = non_empty(row.int_diff).and_then(|s| match s.parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => {
            debug!("'{}': IntDiff '{}' read as symmetric", name, s);
            None
        }
    });

    let coverstock_type = non_empty(row.coverstock_type);
    Ok(Ball {
        name,
        rg,
        diff,
        core: Core::from_int_diff(int_diff),
        coverstock: Coverstock::from_optional(coverstock_type.as_deref()),
        coverstock_name: non_empty(row.coverstock),
        image: non_empty(row.image),
    })
}

#[derive(Default)]
struct ColumnMap {
    name: Option<usize>,
    rg: Option<usize>,
    diff: Option<usize>,
    int_diff: Option<usize>,
    coverstock: Option<usize>,
    coverstock_type: Option<usize>,
    image: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> BfResult<Self> {
        let mut map = Self::default();
        for (idx, raw) in headers.iter().enumerate() {
            let key: String = raw
                .trim()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_ascii_lowercase();
            let slot = match key.as_str() {
                "name" => &mut map.name,
                "rg" => &mut map.rg,
                "diff" | "differential" => &mut map.diff,
                "intdiff" | "massbias" => &mut map.int_diff,
                "coverstock" => &mut map.coverstock,
                "coverstocktype" => &mut map.coverstock_type,
                "image" => &mut map.image,
                _ => continue,
            };
            slot.get_or_insert(idx);
        }

        let mut missing = Vec::new();
        if map.name.is_none() {
            missing.push("Name");
        }
        if map.rg.is_none() {
            missing.push("RG");
        }
        if map.diff.is_none() {
            missing.push("Diff");
        }
        if !missing.is_empty() {
            return Err(BallForgeError::Validation(format!(
                "Inventory is missing required column(s): {}",
                missing.join(", ")
            )));
        }
        Ok(map)
    }

    fn row(&self, row: usize, rec: &csv::StringRecord) -> BallRow {
        let cell = |idx: Option<usize>| idx.and_then(|i| rec.get(i)).map(str::to_string);
        BallRow {
            row: Some(row),
            name: cell(self.name),
            rg: cell(self.rg),
            diff: cell(self.diff),
            int_diff: cell(self.int_diff),
            coverstock: cell(self.coverstock),
            coverstock_type: cell(self.coverstock_type),
            image: cell(self.image),
        }
    }
}

/// Reads raw rows from any CSV source with a header line.
pub fn read_rows<R: Read>(reader: R) -> BfResult<Vec<BallRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(rdr.headers()?)?;
    let mut rows = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let rec = result?;
        if rec.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        rows.push(columns.row(i + 1, &rec));
    }
    debug!("Read {} inventory rows", rows.len());
    Ok(rows)
}

pub fn load_inventory<R: Read>(reader: R) -> BfResult<Inventory> {
    Ok(Inventory::from_rows(read_rows(reader)?))
}

pub fn load_inventory_from_path<P: AsRef<Path>>(path: P) -> BfResult<Inventory> {
    let path = path.as_ref();
    info!("Loading inventory from: {}", path.display());
    let file = File::open(path)?;
    load_inventory(file)
}

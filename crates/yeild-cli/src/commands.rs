//! Command parsing and execution for the `yeild-tiers` tool.

use yeild_tiers::{evaluate, FeatureGate, NavTab, TierTable, UserProgressSnapshot};

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Table,
    Resolve { tasks: i64, referrals: i64, previous_tasks: Option<i64> },
    Gate { feature: String, tasks: i64, referrals: i64 },
    Tabs { tasks: i64, referrals: i64 },
    Validate { path: String },
}

pub fn print_usage() {
    eprintln!("yeild-tiers - Inspect YEILD experience tiers");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  yeild-tiers table                                   Print the active tier table");
    eprintln!("  yeild-tiers resolve <tasks> <referrals> [previous]  Evaluate a user's tier");
    eprintln!("  yeild-tiers gate <feature> <tasks> <referrals>      Check a feature gate");
    eprintln!("  yeild-tiers tabs <tasks> <referrals>                List visible navigation tabs");
    eprintln!("  yeild-tiers validate <path>                         Validate a tier table file");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  YEILD_TIER_TABLE  Path to a JSON tier table (default: built-in tiers)");
    eprintln!("  RUST_LOG          Log filter (default: yeild_tiers=info,yeild_cli=info)");
}

fn parse_count(name: &str, value: Option<&String>) -> Result<i64, String> {
    let value = value.ok_or_else(|| format!("missing <{}>", name))?;
    value
        .parse()
        .map_err(|_| format!("<{}> must be an integer, got {:?}", name, value))
}

fn required(name: &str, value: Option<&String>) -> Result<String, String> {
    value.cloned().ok_or_else(|| format!("missing <{}>", name))
}

impl Command {
    /// Parse arguments after the program name.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let (cmd, rest) = args.split_first().ok_or("missing command")?;
        let command = match cmd.as_str() {
            "table" => Command::Table,
            "resolve" => Command::Resolve {
                tasks: parse_count("tasks", rest.first())?,
                referrals: parse_count("referrals", rest.get(1))?,
                previous_tasks: rest
                    .get(2)
                    .map(|_| parse_count("previous", rest.get(2)))
                    .transpose()?,
            },
            "gate" => Command::Gate {
                feature: required("feature", rest.first())?,
                tasks: parse_count("tasks", rest.get(1))?,
                referrals: parse_count("referrals", rest.get(2))?,
            },
            "tabs" => Command::Tabs {
                tasks: parse_count("tasks", rest.first())?,
                referrals: parse_count("referrals", rest.get(1))?,
            },
            "validate" => Command::Validate {
                path: required("path", rest.first())?,
            },
            other => return Err(format!("unknown command: {}", other)),
        };
        Ok(command)
    }

    /// Run against `table`, returning what to print on stdout.
    pub fn execute(&self, table: &TierTable) -> Result<String, Box<dyn std::error::Error>> {
        match self {
            Command::Table => Ok(serde_json::to_string_pretty(table)?),

            Command::Resolve { tasks, referrals, previous_tasks } => {
                // previous defaults to current: no unlock diff unless asked for
                let snapshot = UserProgressSnapshot::from_signed(*tasks, previous_tasks.unwrap_or(*tasks), *referrals);
                let result = evaluate(snapshot, table);
                Ok(serde_json::to_string_pretty(&result)?)
            }

            Command::Gate { feature, tasks, referrals } => {
                let snapshot = UserProgressSnapshot::from_signed(*tasks, *tasks, *referrals);
                let gate = FeatureGate::for_counts(snapshot.tasks_completed, snapshot.referrals_count, table);
                if gate.is_unlocked(feature) {
                    return Ok("unlocked".to_string());
                }
                Ok(match gate.unlocking_tier(feature) {
                    Some(tier) => format!(
                        "locked (reach {}: {} tasks, {} referrals)",
                        tier.name, tier.min_tasks, tier.min_referrals
                    ),
                    None => "locked (no tier offers this feature)".to_string(),
                })
            }

            Command::Tabs { tasks, referrals } => {
                let snapshot = UserProgressSnapshot::from_signed(*tasks, *tasks, *referrals);
                let gate = FeatureGate::for_counts(snapshot.tasks_completed, snapshot.referrals_count, table);
                let tabs = NavTab::defaults();
                let lines: Vec<String> = gate
                    .visible_tabs(&tabs)
                    .iter()
                    .map(|tab| format!("{}\t{}", tab.id, tab.label))
                    .collect();
                Ok(lines.join("\n"))
            }

            Command::Validate { path } => {
                let checked = TierTable::load(path)?;
                Ok(format!(
                    "ok: {} tiers, {} features",
                    checked.len(),
                    checked.feature_universe().len()
                ))
            }
        }
    }
}

use crate::error::{Result, TopoError};

use std::fmt;

/// An integer argument as typed by the operator: the leading integer of the
/// token, so `3abc` reads as `3` and `5.5` as `5`. The digits are kept as
/// text, without sign noise or leading zeros, so values wider than any
/// machine integer still reach the node lookup and its error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntArg(String);

impl IntArg {
    /// `None` when the token does not start with an optionally signed digit.
    pub fn parse(token: &str) -> Option<Self> {
        let (negative, rest) = match token.as_bytes().first() {
            Some(b'-') => (true, &token[1..]),
            Some(b'+') => (false, &token[1..]),
            _ => (false, token),
        };
        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if len == 0 {
            return None;
        }
        let digits = rest[..len].trim_start_matches('0');
        Some(match (negative, digits.is_empty()) {
            (_, true) => IntArg("0".to_string()),
            (true, false) => IntArg(format!("-{digits}")),
            (false, false) => IntArg(digits.to_string()),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_positive(&self) -> bool {
        !self.0.starts_with('-') && self.0 != "0"
    }
}

impl From<usize> for IntArg {
    fn from(value: usize) -> Self {
        IntArg(value.to_string())
    }
}

impl fmt::Display for IntArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A parsed command line. Argument syntax is checked here; whether the
/// referenced nodes or transactions exist is checked on execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    NodeInfo(IntArg),
    VectorSend {
        start: IntArg,
        end: IntArg,
        data: String,
    },
    TopologyMap(usize),
    BlockMine,
    TransactionVerify(String),
    ConsensusStatus,
    PositionChange(IntArg),
    Unknown(String),
}

impl Command {
    /// Split on whitespace and match the lower-cased first token.
    pub fn parse(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = parts.collect();

        let command = match name.as_str() {
            "help" => Command::Help,
            "node.info" => Command::NodeInfo(parse_position(args.first())?),
            "vector.send" => {
                let (Some(start), Some(end)) =
                    (parse_int(args.first()), parse_int(args.get(1)))
                else {
                    return Err(TopoError::InvalidPositions);
                };
                Command::VectorSend {
                    start,
                    end,
                    data: args.get(2..).map(|rest| rest.join(" ")).unwrap_or_default(),
                }
            }
            "topology.map" => match args.first() {
                None => Command::TopologyMap(crate::DEFAULT_MAP_RANGE),
                Some(raw) => Command::TopologyMap(parse_range(raw)?),
            },
            "block.mine" => Command::BlockMine,
            "transaction.verify" => args
                .first()
                .map(|id| Command::TransactionVerify(id.to_string()))
                .ok_or(TopoError::MissingTransactionId)?,
            "consensus.status" => Command::ConsensusStatus,
            "position.change" => Command::PositionChange(parse_position(args.first())?),
            _ => Command::Unknown(name),
        };
        Ok(command)
    }
}

fn parse_int(arg: Option<&&str>) -> Option<IntArg> {
    arg.and_then(|raw| IntArg::parse(raw))
}

fn parse_position(arg: Option<&&str>) -> Result<IntArg> {
    parse_int(arg).ok_or(TopoError::InvalidPosition)
}

/// Ranges wider than `usize` saturate; the map clamps them anyway.
fn parse_range(raw: &str) -> Result<usize> {
    let range = IntArg::parse(raw)
        .filter(IntArg::is_positive)
        .ok_or(TopoError::InvalidRange)?;
    Ok(range.as_str().parse().unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names_are_case_insensitive() {
        assert_eq!(Command::parse("HELP"), Ok(Command::Help));
        assert_eq!(Command::parse("  Block.Mine  "), Ok(Command::BlockMine));
    }

    #[test]
    fn vector_send_keeps_rest_of_line() {
        assert_eq!(
            Command::parse("vector.send 0 5 hello   ring  world"),
            Ok(Command::VectorSend {
                start: 0usize.into(),
                end: 5usize.into(),
                data: "hello ring world".to_string()
            })
        );
        assert_eq!(
            Command::parse("vector.send 0 5"),
            Ok(Command::VectorSend {
                start: 0usize.into(),
                end: 5usize.into(),
                data: String::new()
            })
        );
        assert_eq!(
            Command::parse("vector.send 0 x data"),
            Err(TopoError::InvalidPositions)
        );
        assert_eq!(Command::parse("vector.send"), Err(TopoError::InvalidPositions));
    }

    #[test]
    fn topology_range_defaults_and_validates() {
        assert_eq!(Command::parse("topology.map"), Ok(Command::TopologyMap(10)));
        assert_eq!(Command::parse("topology.map 50"), Ok(Command::TopologyMap(50)));
        assert_eq!(Command::parse("topology.map 0"), Err(TopoError::InvalidRange));
        assert_eq!(Command::parse("topology.map -3"), Err(TopoError::InvalidRange));
        assert_eq!(Command::parse("topology.map abc"), Err(TopoError::InvalidRange));
        assert_eq!(Command::parse("topology.map 7x"), Ok(Command::TopologyMap(7)));
        assert_eq!(
            Command::parse("topology.map 99999999999999999999"),
            Ok(Command::TopologyMap(usize::MAX))
        );
    }

    #[test]
    fn position_arguments_must_be_numbers() {
        assert_eq!(Command::parse("node.info 3"), Ok(Command::NodeInfo(3usize.into())));
        assert_eq!(Command::parse("node.info"), Err(TopoError::InvalidPosition));
        assert_eq!(
            Command::parse("position.change abc"),
            Err(TopoError::InvalidPosition)
        );
        assert_eq!(
            Command::parse("position.change -2"),
            Ok(Command::PositionChange(IntArg::parse("-2").unwrap()))
        );
    }

    #[test]
    fn integer_arguments_read_the_leading_digits() {
        let arg = |token: &str| IntArg::parse(token).map(|arg| arg.to_string());
        assert_eq!(arg("3abc").as_deref(), Some("3"));
        assert_eq!(arg("5.5").as_deref(), Some("5"));
        assert_eq!(arg("+007").as_deref(), Some("7"));
        assert_eq!(arg("-0").as_deref(), Some("0"));
        assert_eq!(arg("-12x").as_deref(), Some("-12"));
        assert_eq!(
            arg("99999999999999999999").as_deref(),
            Some("99999999999999999999")
        );
        assert_eq!(arg("abc"), None);
        assert_eq!(arg("-"), None);
        assert_eq!(arg("+x"), None);
        assert_eq!(arg("x3"), None);
    }

    #[test]
    fn vector_send_accepts_leading_integers() {
        assert_eq!(
            Command::parse("vector.send 0 5.5 x"),
            Ok(Command::VectorSend {
                start: 0usize.into(),
                end: 5usize.into(),
                data: "x".to_string()
            })
        );
    }

    #[test]
    fn transaction_verify_requires_an_id() {
        assert_eq!(
            Command::parse("transaction.verify"),
            Err(TopoError::MissingTransactionId)
        );
        assert_eq!(
            Command::parse("transaction.verify tx_1_2 extra"),
            Ok(Command::TransactionVerify("tx_1_2".to_string()))
        );
    }

    #[test]
    fn unknown_commands_keep_their_name() {
        assert_eq!(
            Command::parse("Frobnicate now"),
            Ok(Command::Unknown("frobnicate".to_string()))
        );
        assert_eq!(Command::parse(""), Ok(Command::Unknown(String::new())));
    }
}

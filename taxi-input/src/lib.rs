//! Parser for the textual scenario format.
//!
//! ```text
//! <node count N>
//! <id> [<destination> <cost>]...     (N adjacency lines)
//! <shop count>
//! <shop id> [<shop id>]...
//! <client count>
//! <client id> [<client id>]...
//! ```
//!
//! The declared shop and client counts are informational only, the lists are authoritative.

use std::fmt;
use std::str::FromStr;

use log::warn;
use thiserror::Error;

use taxi_core::{GraphError, Node, WeightedGraph};

/// Fully parsed input: the graph plus the shop and client nodes, in declaration order.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub graph: WeightedGraph,
    pub shops: Vec<Node>,
    pub clients: Vec<Node>,
}

/// Part of the input the parser expects next.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Section {
    NodeCount,
    Adjacency { remaining: usize },
    ShopCount,
    Shops,
    ClientCount,
    Clients,
    Done,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::NodeCount => write!(f, "node count"),
            Section::Adjacency { remaining } => write!(f, "{} more adjacency line(s)", remaining),
            Section::ShopCount => write!(f, "shop count"),
            Section::Shops => write!(f, "shop list"),
            Section::ClientCount => write!(f, "client count"),
            Section::Clients => write!(f, "client list"),
            Section::Done => write!(f, "end of input"),
        }
    }
}

#[derive(Error, Clone, PartialEq, Debug)]
pub enum ParseError {
    #[error("Line {line}: bad node count [{value}]")]
    BadCount { line: usize, value: String },

    #[error("Line {line}: missing cost for destination [{destination}]")]
    MissingCost { line: usize, destination: String },

    #[error("Line {line}: bad cost [{value}]")]
    BadCost { line: usize, value: String },

    #[error("Line {line}: {source}")]
    Graph { line: usize, source: GraphError },

    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: Section },
}

impl Scenario {
    /// Parse the whole input.
    pub fn parse(input: &str) -> Result<Scenario, ParseError> {
        let mut parser = Parser::new();
        for (i, line) in input.lines().enumerate() {
            parser.feed(i + 1, line)?;
            if parser.section == Section::Done {
                break;
            }
        }
        parser.finish()
    }
}

impl FromStr for Scenario {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::parse(s)
    }
}

struct Parser {
    section: Section,
    graph: WeightedGraph,
    shops: Vec<Node>,
    clients: Vec<Node>,
    declared_count: Option<usize>,
}

impl Parser {
    fn new() -> Self {
        Parser {
            section: Section::NodeCount,
            graph: WeightedGraph::new(),
            shops: Vec::new(),
            clients: Vec::new(),
            declared_count: None,
        }
    }

    fn feed(&mut self, line_no: usize, line: &str) -> Result<(), ParseError> {
        let line = line.trim();

        // A blank line is an empty list, anywhere else it's just skipped
        let expects_list = matches!(self.section, Section::Shops | Section::Clients);
        if line.is_empty() && !expects_list {
            return Ok(());
        }

        let section = self.section;
        self.section = match section {
            Section::NodeCount => {
                let value = line.split_whitespace().next().unwrap_or_default();
                let count = value.parse::<usize>().map_err(|_| ParseError::BadCount { line: line_no, value: value.to_string() })?;
                if count == 0 {
                    Section::ShopCount
                } else {
                    Section::Adjacency { remaining: count }
                }
            }
            Section::Adjacency { remaining } => {
                self.add_adjacency(line_no, line)?;
                if remaining > 1 {
                    Section::Adjacency { remaining: remaining - 1 }
                } else {
                    Section::ShopCount
                }
            }
            Section::ShopCount => {
                self.declared_count = self.declared(line_no, line);
                Section::Shops
            }
            Section::Shops => {
                self.shops = self.node_list(line_no, line, "shop");
                Section::ClientCount
            }
            Section::ClientCount => {
                self.declared_count = self.declared(line_no, line);
                Section::Clients
            }
            Section::Clients => {
                self.clients = self.node_list(line_no, line, "client");
                Section::Done
            }
            Section::Done => Section::Done,
        };

        Ok(())
    }

    fn finish(self) -> Result<Scenario, ParseError> {
        if self.section != Section::Done {
            return Err(ParseError::UnexpectedEnd { expected: self.section });
        }
        Ok(Scenario {
            graph: self.graph,
            shops: self.shops,
            clients: self.clients,
        })
    }

    /// `<id> [<destination> <cost>]...`
    fn add_adjacency(&mut self, line_no: usize, line: &str) -> Result<(), ParseError> {
        let mut tokens = line.split_whitespace();
        let source = match tokens.next() {
            Some(source) => source,
            None => return Ok(()),
        };
        self.graph.ensure_node(source);

        while let Some(destination) = tokens.next() {
            let value = tokens.next().ok_or_else(|| ParseError::MissingCost { line: line_no, destination: destination.to_string() })?;
            let cost = value.parse::<f64>().map_err(|_| ParseError::BadCost { line: line_no, value: value.to_string() })?;
            self.graph.add_edge(source, destination, cost).map_err(|e| ParseError::Graph { line: line_no, source: e })?;
        }

        Ok(())
    }

    fn declared(&self, line_no: usize, line: &str) -> Option<usize> {
        let count = line.split_whitespace().next().and_then(|v| v.parse::<usize>().ok());
        if count.is_none() {
            warn!("line {}: ignoring unreadable count [{}]", line_no, line);
        }
        count
    }

    fn node_list(&mut self, line_no: usize, line: &str, kind: &str) -> Vec<Node> {
        let mut nodes = Vec::new();
        for id in line.split_whitespace() {
            if !self.graph.contains(id) {
                warn!("line {}: {} [{}] is not part of the graph", line_no, kind, id);
                self.graph.ensure_node(id);
            }
            nodes.push(Node::from(id));
        }

        if let Some(count) = self.declared_count.take() {
            if count != nodes.len() {
                warn!("line {}: {} {}(s) declared but {} listed", line_no, count, kind, nodes.len());
            }
        }

        nodes
    }
}

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::connections::{Route, Shortcut};
use crate::error::Result;
use crate::format::{Block, CfgWriter};
use crate::layers::{Connected, Convolution, Dropout, MaxPool, Softmax, Upsample, Yolo};
use crate::loss::Cost;

/// One entry of a network's layer sequence.
///
/// A node's position in the sequence is what routes and shortcuts refer to,
/// so reordering nodes changes the network's connectivity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Convolution(Convolution),
    MaxPool(MaxPool),
    Connected(Connected),
    Dropout(Dropout),
    Softmax(Softmax),
    Upsample(Upsample),
    Yolo(Yolo),
    Route(Route),
    Shortcut(Shortcut),
    Cost(Cost),
}

impl Node {
    /// Bracketed section tag this node renders under.
    pub fn tag(&self) -> &'static str {
        match self {
            Node::Convolution(_) => "[convolutional]",
            Node::MaxPool(_) => "[maxpool]",
            Node::Connected(_) => "[connected]",
            Node::Dropout(_) => "[dropout]",
            Node::Softmax(_) => "[softmax]",
            Node::Upsample(_) => "[upsample]",
            Node::Yolo(_) => "[yolo]",
            Node::Route(_) => "[route]",
            Node::Shortcut(_) => "[shortcut]",
            Node::Cost(_) => "[cost]",
        }
    }
}

impl Block for Node {
    fn export<W: Write>(&self, out: &mut CfgWriter<W>) -> Result<()> {
        match self {
            Node::Convolution(layer) => layer.export(out),
            Node::MaxPool(layer) => layer.export(out),
            Node::Connected(layer) => layer.export(out),
            Node::Dropout(layer) => layer.export(out),
            Node::Softmax(layer) => layer.export(out),
            Node::Upsample(layer) => layer.export(out),
            Node::Yolo(layer) => layer.export(out),
            Node::Route(conn) => conn.export(out),
            Node::Shortcut(conn) => conn.export(out),
            Node::Cost(loss) => loss.export(out),
        }
    }
}

macro_rules! impl_from_descriptor {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(descriptor: $variant) -> Self {
                    Node::$variant(descriptor)
                }
            }
        )*
    };
}

impl_from_descriptor!(
    Convolution,
    MaxPool,
    Connected,
    Dropout,
    Softmax,
    Upsample,
    Yolo,
    Route,
    Shortcut,
    Cost,
);

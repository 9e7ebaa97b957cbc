//! Model types shared by the unit tests.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::time::Duration;

use crate::{ConfigEnum, Model};

#[derive(ConfigEnum, Clone, Copy, Debug, Default, PartialEq)]
#[model(rename_all = "UPPERCASE")]
pub enum Color {
    #[default]
    Red,
    Green,
    Blue,
}

#[derive(Model, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Model, Clone, Debug, Default, PartialEq)]
pub struct Palette {
    pub name: String,
    pub colors: Vec<Color>,
    pub primary: Color,
}

#[derive(Model, Clone, Debug, Default, PartialEq)]
pub struct Canvas {
    pub title: String,
    pub scale: f64,
    pub points: Vec<Point>,
    pub anchors: BTreeMap<String, Point>,
    pub palette: Palette,
    pub layers: Vec<Vec<i64>>,
    pub tags: Vec<String>,
}

pub fn canvas() -> Canvas {
    Canvas {
        title: String::from("demo"),
        scale: 1.5,
        points: vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }],
        anchors: BTreeMap::from([(String::from("origin"), Point::default())]),
        palette: Palette {
            name: String::from("warm"),
            colors: vec![Color::Red, Color::Green],
            primary: Color::Green,
        },
        layers: vec![vec![1, 2], Vec::new()],
        tags: Vec::new(),
    }
}

#[derive(Model, Debug, Default)]
pub struct Node {
    pub name: String,
    pub children: Vec<Node>,
}

#[derive(Model, Debug, Default)]
pub struct Tree {
    pub root: Node,
}

#[derive(Model, Clone, Debug, PartialEq)]
#[model(singleton)]
pub struct Registry {
    pub enabled: bool,
    pub plugins: Vec<Plugin>,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            enabled: true,
            plugins: Vec::new(),
        }
    }
}

#[derive(Model, Clone, Debug, Default, PartialEq)]
pub struct Plugin {
    pub name: String,
    pub registry: Registry,
}

#[derive(Model, Clone, Debug, Default, PartialEq)]
pub struct Stamp {
    pub label: String,
    pub taken: Duration,
}

#[derive(Model, Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub name: String,
    pub stamp: Stamp,
}

#[derive(Model, Clone, Debug, Default, PartialEq)]
pub struct Album {
    pub label: String,
    pub frame: Frame,
}

pub fn album() -> Album {
    Album {
        label: String::from("summer"),
        frame: Frame {
            name: String::from("orig"),
            stamp: Stamp {
                label: String::from("noon"),
                taken: Duration::from_secs(3),
            },
        },
    }
}

#[derive(Model, Clone, Debug, Default, PartialEq)]
pub struct Counter {
    pub hits: u64,
    pub ratio: f32,
}

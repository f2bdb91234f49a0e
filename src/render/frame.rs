use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{GraphError, GraphResult};
use crate::render::{Affine, LayerKind, LinePrimitive, RectPrimitive, TextPrimitive};

/// One node of the drawing-instruction tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawNode {
    Line(LinePrimitive),
    Rect(RectPrimitive),
    Text(TextPrimitive),
    Group(GroupNode),
}

/// Grouping node: its transform applies to every descendant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupNode {
    pub kind: LayerKind,
    #[serde(default)]
    pub transform: Affine,
    pub children: Vec<DrawNode>,
}

/// Primitive totals over a whole tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrimitiveCounts {
    pub lines: usize,
    pub rects: usize,
    pub texts: usize,
    pub groups: usize,
}

impl GroupNode {
    #[must_use]
    pub fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            transform: Affine::IDENTITY,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.children.push(DrawNode::Line(line));
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.children.push(DrawNode::Rect(rect));
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.children.push(DrawNode::Text(text));
    }

    /// Appends `group` unless it has no children.
    pub fn push_group(&mut self, group: GroupNode) {
        if !group.children.is_empty() {
            self.children.push(DrawNode::Group(group));
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first search for the first group of `kind`, including `self`.
    #[must_use]
    pub fn find(&self, kind: LayerKind) -> Option<&GroupNode> {
        if self.kind == kind {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            DrawNode::Group(group) => group.find(kind),
            _ => None,
        })
    }

    /// Direct line children.
    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.children.iter().filter_map(|child| match child {
            DrawNode::Line(line) => Some(line),
            _ => None,
        })
    }

    /// Direct rect children.
    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.children.iter().filter_map(|child| match child {
            DrawNode::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    /// Direct text children.
    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.children.iter().filter_map(|child| match child {
            DrawNode::Text(text) => Some(text),
            _ => None,
        })
    }

    #[must_use]
    pub fn counts(&self) -> PrimitiveCounts {
        let mut counts = PrimitiveCounts {
            groups: 1,
            ..PrimitiveCounts::default()
        };
        for child in &self.children {
            match child {
                DrawNode::Line(_) => counts.lines += 1,
                DrawNode::Rect(_) => counts.rects += 1,
                DrawNode::Text(_) => counts.texts += 1,
                DrawNode::Group(group) => {
                    let nested = group.counts();
                    counts.lines += nested.lines;
                    counts.rects += nested.rects;
                    counts.texts += nested.texts;
                    counts.groups += nested.groups;
                }
            }
        }
        counts
    }

    pub fn validate(&self) -> GraphResult<()> {
        if !self.transform.is_finite() {
            return Err(GraphError::InvalidData(format!(
                "group `{}` transform must be finite",
                self.kind.as_str()
            )));
        }
        for child in &self.children {
            match child {
                DrawNode::Line(line) => line.validate()?,
                DrawNode::Rect(rect) => rect.validate()?,
                DrawNode::Text(text) => text.validate()?,
                DrawNode::Group(group) => group.validate()?,
            }
        }
        Ok(())
    }
}

/// Backend-agnostic drawing tree for one chart.
///
/// `viewport` is the full canvas, margins included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub root: GroupNode,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            root: GroupNode::new(LayerKind::Surface),
        }
    }

    #[must_use]
    pub fn with_root(viewport: Viewport, root: GroupNode) -> Self {
        Self { viewport, root }
    }

    /// First group of `kind` in the tree.
    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> Option<&GroupNode> {
        self.root.find(kind)
    }

    #[must_use]
    pub fn counts(&self) -> PrimitiveCounts {
        self.root.counts()
    }

    pub fn validate(&self) -> GraphResult<()> {
        if !self.viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.root.validate()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        let counts = self.counts();
        counts.lines == 0 && counts.rects == 0 && counts.texts == 0
    }
}

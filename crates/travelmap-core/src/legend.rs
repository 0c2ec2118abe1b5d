// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Legend controls describing what an overlay's colours mean.

use serde::Serialize;

use crate::color::{parse_css_color, Rgb};

/// CSS class the legend panel carries in HTML front-ends.
pub const LEGEND_CLASS: &str = "info legend";

/// Screen corner a control is anchored to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

/// One colour swatch of a legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    /// CSS colour of the swatch
    pub color: String,
    pub label: String,
}

impl LegendEntry {
    #[must_use]
    pub fn new(color: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            label: label.into(),
        }
    }

    /// Parsed swatch colour, `None` if the CSS value is not understood.
    #[must_use]
    pub fn swatch(&self) -> Option<Rgb> {
        parse_css_color(&self.color)
    }
}

/// A rendered line of a legend, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendLine<'a> {
    Description(&'a str),
    Swatch {
        color: &'a str,
        rgb: Option<Rgb>,
        label: &'a str,
    },
}

/// Static legend panel: a description followed by one swatch per grade.
///
/// Construction has no side effects. The panel only appears once a map
/// attaches it (see [`crate::Map::add_control`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendControl {
    description: String,
    grades: Vec<LegendEntry>,
    position: ControlPosition,
    class_name: &'static str,
}

impl LegendControl {
    #[must_use]
    pub fn new(description: impl Into<String>, grades: Vec<LegendEntry>) -> Self {
        Self {
            description: description.into(),
            grades,
            position: ControlPosition::BottomRight,
            class_name: LEGEND_CLASS,
        }
    }

    #[must_use]
    pub fn with_position(mut self, position: ControlPosition) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn grades(&self) -> &[LegendEntry] {
        &self.grades
    }

    #[must_use]
    pub const fn position(&self) -> ControlPosition {
        self.position
    }

    #[must_use]
    pub const fn class_name(&self) -> &'static str {
        self.class_name
    }

    /// Lines in display order: the description once, then every grade in
    /// the order it was given.
    #[must_use]
    pub fn render(&self) -> Vec<LegendLine<'_>> {
        std::iter::once(LegendLine::Description(&self.description))
            .chain(self.grades.iter().map(|grade| LegendLine::Swatch {
                color: &grade.color,
                rgb: grade.swatch(),
                label: &grade.label,
            }))
            .collect()
    }
}

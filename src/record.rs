// Copyright 2023 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Serialized tree data model.
//!
//! A syntax tree node serializes to a mapping with exactly one key, the
//! node's type name, whose value maps field names to converted field
//! values. Field order is part of the format, so records keep their
//! fields in a vector and serialize them by hand rather than through a
//! derived implementation.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Number;

/// Sentinel emitted for field values outside the closed set of
/// convertible value kinds.
pub const UNRECOGNIZED: &str = "unrecognized";

/// Closed set of value shapes occurring in a serialized tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A node with at least one declared field.
    Record(Record),
    /// A node with no declared fields, reduced to its bare type name.
    Leaf(&'static str),
    /// An ordered sequence of converted values.
    Seq(Vec<Value>),
    Str(String),
    Num(Number),
    Bool(bool),
    /// A semantically absent value, rendered as JSON null.
    Null,
    /// Placeholder for a value of an unsupported kind.
    Unrecognized,
}

/// Serialized form of one syntax tree node: the type name, and the
/// converted fields in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    type_name: &'static str,
    fields: Vec<(&'static str, Value)>,
}

impl Record {
    pub fn new(type_name: &'static str) -> Record {
        Record { type_name, fields: vec![] }
    }

    /// Append a field. Fields serialize in insertion order, which must
    /// follow the declared field list of the node type.
    pub fn field(mut self, name: &'static str, value: Value) -> Record {
        self.fields.push((name, value));
        self
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn fields(&self) -> impl Iterator<Item = &(&'static str, Value)> {
        self.fields.iter()
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Value {
        Value::Record(record)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Record(record) => record.serialize(serializer),
            Value::Leaf(type_name) => serializer.serialize_str(type_name),
            Value::Seq(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
            Value::Str(value) => serializer.serialize_str(value),
            Value::Num(value) => value.serialize(serializer),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Null => serializer.serialize_unit(),
            Value::Unrecognized => serializer.serialize_str(UNRECOGNIZED),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut outer = serializer.serialize_map(Some(1))?;
        outer.serialize_entry(self.type_name, &FieldMap(&self.fields))?;
        outer.end()
    }
}

struct FieldMap<'a>(&'a [(&'static str, Value)]);

impl Serialize for FieldMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

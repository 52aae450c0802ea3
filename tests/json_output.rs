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

//! End-to-end tests of the serialized output against the fixture file.

use ast2json::{json, parser};

const CLASSES_PY: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/input/classes.py");

fn serialize_fixture() -> serde_json::Value {
    let mut sources = parser::SourceDatabase::new();
    let module = parser::parse_file(&mut sources, CLASSES_PY).unwrap();
    serde_json::from_str(&json::generate(&module).unwrap()).unwrap()
}

#[test]
fn fixture_output_is_valid_json_with_one_top_level_key() {
    let value = serialize_fixture();
    let top = value.as_object().unwrap();
    assert_eq!(top.len(), 1);
    assert!(top.contains_key("Module"));
}

#[test]
fn fixture_classes_are_serialized_in_order() {
    let value = serialize_fixture();
    let body = value["Module"]["body"].as_array().unwrap();
    assert_eq!(body.len(), 3);
    assert_eq!(body[0]["ClassDef"]["name"], serde_json::json!("Foo"));
    assert_eq!(body[1]["ClassDef"]["name"], serde_json::json!("_Bar"));
    assert_eq!(body[2]["ClassDef"]["name"], serde_json::json!("__Baz"));
}

#[test]
fn annotated_class_attribute_shape() {
    let value = serialize_fixture();
    let attr = &value["Module"]["body"][0]["ClassDef"]["body"][0]["AnnAssign"];
    assert_eq!(attr["target"]["Name"]["id"], serde_json::json!("static_var"));
    assert_eq!(attr["target"]["Name"]["ctx"], serde_json::json!("Store"));
    assert_eq!(attr["annotation"]["Name"]["id"], serde_json::json!("bool"));
    assert_eq!(attr["value"]["Constant"]["value"], serde_json::json!(false));
    assert_eq!(attr["simple"], serde_json::json!(1));
}

#[test]
fn plain_class_attribute_keeps_float_value() {
    let value = serialize_fixture();
    let assign = &value["Module"]["body"][0]["ClassDef"]["body"][2]["Assign"];
    assert_eq!(assign["targets"][0]["Name"]["id"], serde_json::json!("__static_var"));
    assert_eq!(assign["value"]["Constant"]["value"], serde_json::json!(123.456));
}

#[test]
fn method_with_typed_defaults() {
    let value = serialize_fixture();
    let method = &value["Module"]["body"][0]["ClassDef"]["body"][4]["FunctionDef"];
    assert_eq!(method["name"], serde_json::json!("foo"));
    assert_eq!(method["returns"]["Name"]["id"], serde_json::json!("int"));

    let args = &method["args"]["arguments"];
    let params = args["args"].as_array().unwrap();
    assert_eq!(params.len(), 3);
    assert_eq!(params[0]["arg"]["arg"], serde_json::json!("self"));
    assert_eq!(params[0]["arg"]["annotation"], serde_json::Value::Null);
    assert_eq!(params[1]["arg"]["annotation"]["Name"]["id"], serde_json::json!("int"));
    assert_eq!(params[2]["arg"]["annotation"]["Name"]["id"], serde_json::json!("str"));

    // `self` has no default, so only two values collect into the
    // trailing defaults list.
    let defaults = args["defaults"].as_array().unwrap();
    assert_eq!(defaults.len(), 2);
    assert_eq!(defaults[0]["Constant"]["value"], serde_json::json!(3));
    assert_eq!(defaults[1]["Constant"]["value"], serde_json::json!("Yoohu"));
}

#[test]
fn noop_method_body_is_a_bare_pass_marker() {
    let value = serialize_fixture();
    let method = &value["Module"]["body"][0]["ClassDef"]["body"][4]["FunctionDef"];
    assert_eq!(method["body"], serde_json::json!(["Pass"]));
}

#[test]
fn inherited_class_lists_its_bases() {
    let value = serialize_fixture();
    let class_def = &value["Module"]["body"][2]["ClassDef"];
    let bases = class_def["bases"].as_array().unwrap();
    assert_eq!(bases.len(), 2);
    assert_eq!(bases[0]["Name"]["id"], serde_json::json!("Foo"));
    assert_eq!(bases[1]["Name"]["id"], serde_json::json!("_Bar"));
    assert_eq!(class_def["keywords"], serde_json::json!([]));
}

#[test]
fn fixture_output_is_stable_across_runs() {
    let mut sources1 = parser::SourceDatabase::new();
    let mut sources2 = parser::SourceDatabase::new();
    let module1 = parser::parse_file(&mut sources1, CLASSES_PY).unwrap();
    let module2 = parser::parse_file(&mut sources2, CLASSES_PY).unwrap();
    assert_eq!(json::generate(&module1).unwrap(), json::generate(&module2).unwrap());
}

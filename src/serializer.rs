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

//! Tree serializer.
//!
//! Walks a parsed tree and converts every node into a record keyed by
//! the node's type name, with one entry per declared field. Node types
//! without declared fields (operators, expression contexts, `pass` and
//! friends) reduce to their bare type name, whether they appear as a
//! direct field value or as a sequence element. Field names and their
//! order follow the declared field list of each node type.

use rustpython_ast as ast;
use serde_json::Number;

use crate::record::{Record, Value};

/// Serialize the root node produced by the parser.
pub fn serialize(module: &ast::Mod) -> Value {
    match module {
        ast::Mod::Module(module) => Record::new("Module")
            .field("body", serialize_stmts(&module.body))
            .field(
                "type_ignores",
                Value::Seq(module.type_ignores.iter().map(serialize_type_ignore).collect()),
            )
            .into(),
        ast::Mod::Interactive(module) => {
            Record::new("Interactive").field("body", serialize_stmts(&module.body)).into()
        }
        ast::Mod::Expression(module) => {
            Record::new("Expression").field("body", serialize_expr(&module.body)).into()
        }
        ast::Mod::FunctionType(module) => Record::new("FunctionType")
            .field("argtypes", serialize_exprs(&module.argtypes))
            .field("returns", serialize_expr(&module.returns))
            .into(),
    }
}

fn serialize_stmts(stmts: &[ast::Stmt]) -> Value {
    Value::Seq(stmts.iter().map(serialize_stmt).collect())
}

fn serialize_exprs(exprs: &[ast::Expr]) -> Value {
    Value::Seq(exprs.iter().map(serialize_expr).collect())
}

/// Convert an optional field value, emitting null when absent.
fn optional<T>(value: &Option<T>, serialize: impl Fn(&T) -> Value) -> Value {
    value.as_ref().map_or(Value::Null, serialize)
}

fn identifier(name: &ast::Identifier) -> Value {
    Value::Str(name.to_string())
}

fn identifiers(names: &[ast::Identifier]) -> Value {
    Value::Seq(names.iter().map(identifier).collect())
}

fn string(value: &String) -> Value {
    Value::Str(value.clone())
}

fn flag(value: bool) -> Value {
    Value::Num(Number::from(value as u8))
}

fn serialize_stmt(stmt: &ast::Stmt) -> Value {
    match stmt {
        ast::Stmt::FunctionDef(def) => Record::new("FunctionDef")
            .field("name", identifier(&def.name))
            .field("args", serialize_arguments(&def.args))
            .field("body", serialize_stmts(&def.body))
            .field("decorator_list", serialize_decorators(&def.decorator_list))
            .field("returns", optional(&def.returns, |e| serialize_expr(e)))
            .field("type_comment", optional(&def.type_comment, string))
            .field("type_params", serialize_type_params(&def.type_params))
            .into(),
        ast::Stmt::AsyncFunctionDef(def) => Record::new("AsyncFunctionDef")
            .field("name", identifier(&def.name))
            .field("args", serialize_arguments(&def.args))
            .field("body", serialize_stmts(&def.body))
            .field("decorator_list", serialize_decorators(&def.decorator_list))
            .field("returns", optional(&def.returns, |e| serialize_expr(e)))
            .field("type_comment", optional(&def.type_comment, string))
            .field("type_params", serialize_type_params(&def.type_params))
            .into(),
        ast::Stmt::ClassDef(def) => Record::new("ClassDef")
            .field("name", identifier(&def.name))
            .field("bases", serialize_exprs(&def.bases))
            .field("keywords", serialize_keywords(&def.keywords))
            .field("body", serialize_stmts(&def.body))
            .field("decorator_list", serialize_decorators(&def.decorator_list))
            .field("type_params", serialize_type_params(&def.type_params))
            .into(),
        ast::Stmt::Return(ret) => Record::new("Return")
            .field("value", optional(&ret.value, |e| serialize_expr(e)))
            .into(),
        ast::Stmt::Delete(del) => {
            Record::new("Delete").field("targets", serialize_exprs(&del.targets)).into()
        }
        ast::Stmt::Assign(assign) => Record::new("Assign")
            .field("targets", serialize_exprs(&assign.targets))
            .field("value", serialize_expr(&assign.value))
            .field("type_comment", optional(&assign.type_comment, string))
            .into(),
        ast::Stmt::TypeAlias(alias) => Record::new("TypeAlias")
            .field("name", serialize_expr(&alias.name))
            .field("type_params", serialize_type_params(&alias.type_params))
            .field("value", serialize_expr(&alias.value))
            .into(),
        ast::Stmt::AugAssign(assign) => Record::new("AugAssign")
            .field("target", serialize_expr(&assign.target))
            .field("op", serialize_operator(&assign.op))
            .field("value", serialize_expr(&assign.value))
            .into(),
        ast::Stmt::AnnAssign(assign) => Record::new("AnnAssign")
            .field("target", serialize_expr(&assign.target))
            .field("annotation", serialize_expr(&assign.annotation))
            .field("value", optional(&assign.value, |e| serialize_expr(e)))
            .field("simple", flag(assign.simple))
            .into(),
        ast::Stmt::For(node) => Record::new("For")
            .field("target", serialize_expr(&node.target))
            .field("iter", serialize_expr(&node.iter))
            .field("body", serialize_stmts(&node.body))
            .field("orelse", serialize_stmts(&node.orelse))
            .field("type_comment", optional(&node.type_comment, string))
            .into(),
        ast::Stmt::AsyncFor(node) => Record::new("AsyncFor")
            .field("target", serialize_expr(&node.target))
            .field("iter", serialize_expr(&node.iter))
            .field("body", serialize_stmts(&node.body))
            .field("orelse", serialize_stmts(&node.orelse))
            .field("type_comment", optional(&node.type_comment, string))
            .into(),
        ast::Stmt::While(node) => Record::new("While")
            .field("test", serialize_expr(&node.test))
            .field("body", serialize_stmts(&node.body))
            .field("orelse", serialize_stmts(&node.orelse))
            .into(),
        ast::Stmt::If(node) => Record::new("If")
            .field("test", serialize_expr(&node.test))
            .field("body", serialize_stmts(&node.body))
            .field("orelse", serialize_stmts(&node.orelse))
            .into(),
        ast::Stmt::With(node) => Record::new("With")
            .field("items", serialize_with_items(&node.items))
            .field("body", serialize_stmts(&node.body))
            .field("type_comment", optional(&node.type_comment, string))
            .into(),
        ast::Stmt::AsyncWith(node) => Record::new("AsyncWith")
            .field("items", serialize_with_items(&node.items))
            .field("body", serialize_stmts(&node.body))
            .field("type_comment", optional(&node.type_comment, string))
            .into(),
        ast::Stmt::Match(node) => Record::new("Match")
            .field("subject", serialize_expr(&node.subject))
            .field("cases", Value::Seq(node.cases.iter().map(serialize_match_case).collect()))
            .into(),
        ast::Stmt::Raise(node) => Record::new("Raise")
            .field("exc", optional(&node.exc, |e| serialize_expr(e)))
            .field("cause", optional(&node.cause, |e| serialize_expr(e)))
            .into(),
        ast::Stmt::Try(node) => Record::new("Try")
            .field("body", serialize_stmts(&node.body))
            .field("handlers", serialize_except_handlers(&node.handlers))
            .field("orelse", serialize_stmts(&node.orelse))
            .field("finalbody", serialize_stmts(&node.finalbody))
            .into(),
        ast::Stmt::TryStar(node) => Record::new("TryStar")
            .field("body", serialize_stmts(&node.body))
            .field("handlers", serialize_except_handlers(&node.handlers))
            .field("orelse", serialize_stmts(&node.orelse))
            .field("finalbody", serialize_stmts(&node.finalbody))
            .into(),
        ast::Stmt::Assert(node) => Record::new("Assert")
            .field("test", serialize_expr(&node.test))
            .field("msg", optional(&node.msg, |e| serialize_expr(e)))
            .into(),
        ast::Stmt::Import(node) => Record::new("Import")
            .field("names", Value::Seq(node.names.iter().map(serialize_alias).collect()))
            .into(),
        ast::Stmt::ImportFrom(node) => Record::new("ImportFrom")
            .field("module", optional(&node.module, identifier))
            .field("names", Value::Seq(node.names.iter().map(serialize_alias).collect()))
            .field("level", optional(&node.level, |l| Value::Num(Number::from(l.to_u32()))))
            .into(),
        ast::Stmt::Global(node) => {
            Record::new("Global").field("names", identifiers(&node.names)).into()
        }
        ast::Stmt::Nonlocal(node) => {
            Record::new("Nonlocal").field("names", identifiers(&node.names)).into()
        }
        ast::Stmt::Expr(node) => {
            Record::new("Expr").field("value", serialize_expr(&node.value)).into()
        }
        ast::Stmt::Pass(_) => Value::Leaf("Pass"),
        ast::Stmt::Break(_) => Value::Leaf("Break"),
        ast::Stmt::Continue(_) => Value::Leaf("Continue"),
        // Escape-command statements exist only in the interactive
        // parse modes, which this tool never requests.
        _ => Value::Unrecognized,
    }
}

fn serialize_expr(expr: &ast::Expr) -> Value {
    match expr {
        ast::Expr::BoolOp(node) => Record::new("BoolOp")
            .field("op", serialize_bool_op(&node.op))
            .field("values", serialize_exprs(&node.values))
            .into(),
        ast::Expr::NamedExpr(node) => Record::new("NamedExpr")
            .field("target", serialize_expr(&node.target))
            .field("value", serialize_expr(&node.value))
            .into(),
        ast::Expr::BinOp(node) => Record::new("BinOp")
            .field("left", serialize_expr(&node.left))
            .field("op", serialize_operator(&node.op))
            .field("right", serialize_expr(&node.right))
            .into(),
        ast::Expr::UnaryOp(node) => Record::new("UnaryOp")
            .field("op", serialize_unary_op(&node.op))
            .field("operand", serialize_expr(&node.operand))
            .into(),
        ast::Expr::Lambda(node) => Record::new("Lambda")
            .field("args", serialize_arguments(&node.args))
            .field("body", serialize_expr(&node.body))
            .into(),
        ast::Expr::IfExp(node) => Record::new("IfExp")
            .field("test", serialize_expr(&node.test))
            .field("body", serialize_expr(&node.body))
            .field("orelse", serialize_expr(&node.orelse))
            .into(),
        ast::Expr::Dict(node) => Record::new("Dict")
            .field(
                "keys",
                Value::Seq(
                    node.keys.iter().map(|key| optional(key, |e| serialize_expr(e))).collect(),
                ),
            )
            .field("values", serialize_exprs(&node.values))
            .into(),
        ast::Expr::Set(node) => Record::new("Set").field("elts", serialize_exprs(&node.elts)).into(),
        ast::Expr::ListComp(node) => Record::new("ListComp")
            .field("elt", serialize_expr(&node.elt))
            .field("generators", serialize_comprehensions(&node.generators))
            .into(),
        ast::Expr::SetComp(node) => Record::new("SetComp")
            .field("elt", serialize_expr(&node.elt))
            .field("generators", serialize_comprehensions(&node.generators))
            .into(),
        ast::Expr::DictComp(node) => Record::new("DictComp")
            .field("key", serialize_expr(&node.key))
            .field("value", serialize_expr(&node.value))
            .field("generators", serialize_comprehensions(&node.generators))
            .into(),
        ast::Expr::GeneratorExp(node) => Record::new("GeneratorExp")
            .field("elt", serialize_expr(&node.elt))
            .field("generators", serialize_comprehensions(&node.generators))
            .into(),
        ast::Expr::Await(node) => {
            Record::new("Await").field("value", serialize_expr(&node.value)).into()
        }
        ast::Expr::Yield(node) => Record::new("Yield")
            .field("value", optional(&node.value, |e| serialize_expr(e)))
            .into(),
        ast::Expr::YieldFrom(node) => {
            Record::new("YieldFrom").field("value", serialize_expr(&node.value)).into()
        }
        ast::Expr::Compare(node) => Record::new("Compare")
            .field("left", serialize_expr(&node.left))
            .field("ops", Value::Seq(node.ops.iter().map(serialize_cmp_op).collect()))
            .field("comparators", serialize_exprs(&node.comparators))
            .into(),
        ast::Expr::Call(node) => Record::new("Call")
            .field("func", serialize_expr(&node.func))
            .field("args", serialize_exprs(&node.args))
            .field("keywords", serialize_keywords(&node.keywords))
            .into(),
        ast::Expr::FormattedValue(node) => Record::new("FormattedValue")
            .field("value", serialize_expr(&node.value))
            .field("conversion", Value::Num(Number::from(node.conversion as i8)))
            .field("format_spec", optional(&node.format_spec, |e| serialize_expr(e)))
            .into(),
        ast::Expr::JoinedStr(node) => {
            Record::new("JoinedStr").field("values", serialize_exprs(&node.values)).into()
        }
        ast::Expr::Constant(node) => Record::new("Constant")
            .field("value", serialize_constant(&node.value))
            .field("kind", optional(&node.kind, string))
            .into(),
        ast::Expr::Attribute(node) => Record::new("Attribute")
            .field("value", serialize_expr(&node.value))
            .field("attr", identifier(&node.attr))
            .field("ctx", serialize_expr_context(&node.ctx))
            .into(),
        ast::Expr::Subscript(node) => Record::new("Subscript")
            .field("value", serialize_expr(&node.value))
            .field("slice", serialize_expr(&node.slice))
            .field("ctx", serialize_expr_context(&node.ctx))
            .into(),
        ast::Expr::Starred(node) => Record::new("Starred")
            .field("value", serialize_expr(&node.value))
            .field("ctx", serialize_expr_context(&node.ctx))
            .into(),
        ast::Expr::Name(node) => Record::new("Name")
            .field("id", identifier(&node.id))
            .field("ctx", serialize_expr_context(&node.ctx))
            .into(),
        ast::Expr::List(node) => Record::new("List")
            .field("elts", serialize_exprs(&node.elts))
            .field("ctx", serialize_expr_context(&node.ctx))
            .into(),
        ast::Expr::Tuple(node) => Record::new("Tuple")
            .field("elts", serialize_exprs(&node.elts))
            .field("ctx", serialize_expr_context(&node.ctx))
            .into(),
        ast::Expr::Slice(node) => Record::new("Slice")
            .field("lower", optional(&node.lower, |e| serialize_expr(e)))
            .field("upper", optional(&node.upper, |e| serialize_expr(e)))
            .field("step", optional(&node.step, |e| serialize_expr(e)))
            .into(),
        // Escape-command expressions exist only in the interactive
        // parse modes, which this tool never requests.
        _ => Value::Unrecognized,
    }
}

fn serialize_constant(value: &ast::Constant) -> Value {
    match value {
        ast::Constant::None => Value::Null,
        ast::Constant::Bool(value) => Value::Bool(*value),
        ast::Constant::Str(value) => Value::Str(value.clone()),
        ast::Constant::Int(value) => serialize_int(&value.to_string()),
        ast::Constant::Float(value) => {
            Number::from_f64(*value).map_or(Value::Unrecognized, Value::Num)
        }
        // Bytes, complex and ellipsis literals, and folded constant
        // tuples have no JSON equivalent.
        ast::Constant::Bytes(_)
        | ast::Constant::Tuple(_)
        | ast::Constant::Complex { .. }
        | ast::Constant::Ellipsis => Value::Unrecognized,
    }
}

/// Emit an integer constant exactly when it fits a 64-bit JSON number.
/// Python integers are unbounded; wider values degrade to the nearest
/// float so that the output stays valid JSON.
fn serialize_int(repr: &str) -> Value {
    if let Ok(value) = repr.parse::<i64>() {
        Value::Num(Number::from(value))
    } else if let Ok(value) = repr.parse::<u64>() {
        Value::Num(Number::from(value))
    } else {
        repr.parse::<f64>().ok().and_then(Number::from_f64).map_or(Value::Unrecognized, Value::Num)
    }
}

/// Rebuild the declared field list of the `arguments` node. The parser
/// pairs every parameter with its default; the declared form keeps
/// positional defaults in a trailing `defaults` list and keyword-only
/// defaults in `kw_defaults`, aligned with `kwonlyargs` and padded with
/// nulls.
fn serialize_arguments(args: &ast::Arguments) -> Value {
    let defaults: Vec<Value> = args
        .posonlyargs
        .iter()
        .chain(&args.args)
        .filter_map(|arg| arg.default.as_ref().map(|default| serialize_expr(default)))
        .collect();
    let kw_defaults: Vec<Value> = args
        .kwonlyargs
        .iter()
        .map(|arg| optional(&arg.default, |default| serialize_expr(default)))
        .collect();
    Record::new("arguments")
        .field(
            "posonlyargs",
            Value::Seq(args.posonlyargs.iter().map(|arg| serialize_arg(&arg.def)).collect()),
        )
        .field("args", Value::Seq(args.args.iter().map(|arg| serialize_arg(&arg.def)).collect()))
        .field("vararg", optional(&args.vararg, |arg| serialize_arg(arg)))
        .field(
            "kwonlyargs",
            Value::Seq(args.kwonlyargs.iter().map(|arg| serialize_arg(&arg.def)).collect()),
        )
        .field("kw_defaults", Value::Seq(kw_defaults))
        .field("kwarg", optional(&args.kwarg, |arg| serialize_arg(arg)))
        .field("defaults", Value::Seq(defaults))
        .into()
}

// Decorators carry their own node wrapping the decorating expression;
// only the expression is part of the declared decorator_list field.
fn serialize_decorators(decorators: &[ast::Expr]) -> Value {
    Value::Seq(decorators.iter().map(|decorator| serialize_expr(decorator)).collect())
}

fn serialize_arg(node: &ast::Arg) -> Value {
    Record::new("arg")
        .field("arg", identifier(&node.arg))
        .field("annotation", optional(&node.annotation, |e| serialize_expr(e)))
        .field("type_comment", optional(&node.type_comment, string))
        .into()
}

fn serialize_keywords(keywords: &[ast::Keyword]) -> Value {
    Value::Seq(keywords.iter().map(serialize_keyword).collect())
}

fn serialize_keyword(node: &ast::Keyword) -> Value {
    Record::new("keyword")
        .field("arg", optional(&node.arg, identifier))
        .field("value", serialize_expr(&node.value))
        .into()
}

fn serialize_alias(node: &ast::Alias) -> Value {
    Record::new("alias")
        .field("name", identifier(&node.name))
        .field("asname", optional(&node.asname, identifier))
        .into()
}

fn serialize_with_items(items: &[ast::WithItem]) -> Value {
    Value::Seq(items.iter().map(serialize_with_item).collect())
}

fn serialize_with_item(node: &ast::WithItem) -> Value {
    Record::new("withitem")
        .field("context_expr", serialize_expr(&node.context_expr))
        .field("optional_vars", optional(&node.optional_vars, |e| serialize_expr(e)))
        .into()
}

fn serialize_comprehensions(generators: &[ast::Comprehension]) -> Value {
    Value::Seq(generators.iter().map(serialize_comprehension).collect())
}

fn serialize_comprehension(node: &ast::Comprehension) -> Value {
    Record::new("comprehension")
        .field("target", serialize_expr(&node.target))
        .field("iter", serialize_expr(&node.iter))
        .field("ifs", serialize_exprs(&node.ifs))
        .field("is_async", flag(node.is_async))
        .into()
}

fn serialize_except_handlers(handlers: &[ast::ExceptHandler]) -> Value {
    Value::Seq(handlers.iter().map(serialize_except_handler).collect())
}

fn serialize_except_handler(handler: &ast::ExceptHandler) -> Value {
    let ast::ExceptHandler::ExceptHandler(node) = handler;
    Record::new("ExceptHandler")
        .field("type", optional(&node.type_, |e| serialize_expr(e)))
        .field("name", optional(&node.name, identifier))
        .field("body", serialize_stmts(&node.body))
        .into()
}

fn serialize_match_case(node: &ast::MatchCase) -> Value {
    Record::new("match_case")
        .field("pattern", serialize_pattern(&node.pattern))
        .field("guard", optional(&node.guard, |e| serialize_expr(e)))
        .field("body", serialize_stmts(&node.body))
        .into()
}

fn serialize_patterns(patterns: &[ast::Pattern]) -> Value {
    Value::Seq(patterns.iter().map(serialize_pattern).collect())
}

fn serialize_pattern(pattern: &ast::Pattern) -> Value {
    match pattern {
        ast::Pattern::MatchValue(node) => {
            Record::new("MatchValue").field("value", serialize_expr(&node.value)).into()
        }
        ast::Pattern::MatchSingleton(node) => {
            Record::new("MatchSingleton").field("value", serialize_constant(&node.value)).into()
        }
        ast::Pattern::MatchSequence(node) => Record::new("MatchSequence")
            .field("patterns", serialize_patterns(&node.patterns))
            .into(),
        ast::Pattern::MatchMapping(node) => Record::new("MatchMapping")
            .field("keys", serialize_exprs(&node.keys))
            .field("patterns", serialize_patterns(&node.patterns))
            .field("rest", optional(&node.rest, identifier))
            .into(),
        ast::Pattern::MatchClass(node) => Record::new("MatchClass")
            .field("cls", serialize_expr(&node.cls))
            .field("patterns", serialize_patterns(&node.patterns))
            .field("kwd_attrs", identifiers(&node.kwd_attrs))
            .field("kwd_patterns", serialize_patterns(&node.kwd_patterns))
            .into(),
        ast::Pattern::MatchStar(node) => {
            Record::new("MatchStar").field("name", optional(&node.name, identifier)).into()
        }
        ast::Pattern::MatchAs(node) => Record::new("MatchAs")
            .field("pattern", optional(&node.pattern, |p| serialize_pattern(p)))
            .field("name", optional(&node.name, identifier))
            .into(),
        ast::Pattern::MatchOr(node) => {
            Record::new("MatchOr").field("patterns", serialize_patterns(&node.patterns)).into()
        }
    }
}

fn serialize_type_params(type_params: &[ast::TypeParam]) -> Value {
    Value::Seq(type_params.iter().map(serialize_type_param).collect())
}

fn serialize_type_param(type_param: &ast::TypeParam) -> Value {
    match type_param {
        ast::TypeParam::TypeVar(node) => Record::new("TypeVar")
            .field("name", identifier(&node.name))
            .field("bound", optional(&node.bound, |e| serialize_expr(e)))
            .into(),
        ast::TypeParam::ParamSpec(node) => {
            Record::new("ParamSpec").field("name", identifier(&node.name)).into()
        }
        ast::TypeParam::TypeVarTuple(node) => {
            Record::new("TypeVarTuple").field("name", identifier(&node.name)).into()
        }
    }
}

fn serialize_type_ignore(ignore: &ast::TypeIgnore) -> Value {
    let ast::TypeIgnore::TypeIgnore(node) = ignore;
    Record::new("TypeIgnore")
        .field("lineno", Value::Num(Number::from(node.lineno.to_u32())))
        .field("tag", Value::Str(node.tag.clone()))
        .into()
}

fn serialize_bool_op(op: &ast::BoolOp) -> Value {
    Value::Leaf(match op {
        ast::BoolOp::And => "And",
        ast::BoolOp::Or => "Or",
    })
}

fn serialize_operator(op: &ast::Operator) -> Value {
    Value::Leaf(match op {
        ast::Operator::Add => "Add",
        ast::Operator::Sub => "Sub",
        ast::Operator::Mult => "Mult",
        ast::Operator::MatMult => "MatMult",
        ast::Operator::Div => "Div",
        ast::Operator::Mod => "Mod",
        ast::Operator::Pow => "Pow",
        ast::Operator::LShift => "LShift",
        ast::Operator::RShift => "RShift",
        ast::Operator::BitOr => "BitOr",
        ast::Operator::BitXor => "BitXor",
        ast::Operator::BitAnd => "BitAnd",
        ast::Operator::FloorDiv => "FloorDiv",
    })
}

fn serialize_unary_op(op: &ast::UnaryOp) -> Value {
    Value::Leaf(match op {
        ast::UnaryOp::Invert => "Invert",
        ast::UnaryOp::Not => "Not",
        ast::UnaryOp::UAdd => "UAdd",
        ast::UnaryOp::USub => "USub",
    })
}

fn serialize_cmp_op(op: &ast::CmpOp) -> Value {
    Value::Leaf(match op {
        ast::CmpOp::Eq => "Eq",
        ast::CmpOp::NotEq => "NotEq",
        ast::CmpOp::Lt => "Lt",
        ast::CmpOp::LtE => "LtE",
        ast::CmpOp::Gt => "Gt",
        ast::CmpOp::GtE => "GtE",
        ast::CmpOp::Is => "Is",
        ast::CmpOp::IsNot => "IsNot",
        ast::CmpOp::In => "In",
        ast::CmpOp::NotIn => "NotIn",
    })
}

fn serialize_expr_context(ctx: &ast::ExprContext) -> Value {
    Value::Leaf(match ctx {
        ast::ExprContext::Load => "Load",
        ast::ExprContext::Store => "Store",
        ast::ExprContext::Del => "Del",
    })
}

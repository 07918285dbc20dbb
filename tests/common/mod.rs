#![allow(dead_code)]

use iotagen::model::{Annotation, Argument, Interface, Namespace, Operation, Parameter, Type};
use serde_json::json;

pub fn annotation(name: &str) -> Annotation {
    Annotation {
        name: name.to_string(),
        arguments: vec![],
    }
}

pub fn uses(deps: &[&str]) -> Annotation {
    Annotation {
        name: "uses".to_string(),
        arguments: vec![Argument {
            name: None,
            value: json!(deps),
        }],
    }
}

pub fn param(name: &str, ty: Type) -> Parameter {
    Parameter {
        name: name.to_string(),
        ty,
    }
}

pub fn operation(name: &str, parameters: Vec<Parameter>, ty: Type) -> Operation {
    Operation {
        name: name.to_string(),
        parameters,
        ty,
        annotations: vec![],
    }
}

pub fn interface(name: &str, annotations: Vec<Annotation>, operations: Vec<Operation>) -> Interface {
    Interface {
        name: name.to_string(),
        operations,
        annotations,
    }
}

pub fn namespace(interfaces: Vec<Interface>) -> Namespace {
    interfaces
        .into_iter()
        .fold(Namespace::new("test.v1"), |ns, iface| ns.with_interface(iface))
}

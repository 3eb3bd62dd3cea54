//! RPC service declarations.

use crate::error::Result;
use crate::metadata::{extract_attributes, extract_documentation};
use crate::model::{RpcCall, Service};
use crate::naming::{split_qualified, stable_id};
use crate::reader::reflection::{RPCCall, Service as ServiceTable};
use crate::reader::required;
use flatbuffers::{ForwardsUOffset, Vector};

pub(super) fn walk_services(
    list: Vector<'_, ForwardsUOffset<ServiceTable<'_>>>,
) -> Result<Vec<Service>> {
    list.iter().map(walk_service).collect()
}

fn walk_service(view: ServiceTable<'_>) -> Result<Service> {
    let qualified = required(view.name(), "Service", "name")?;
    let (namespace, name) = split_qualified(qualified);

    let calls = match view.calls() {
        Some(list) => list.iter().map(walk_call).collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    Ok(Service {
        id: stable_id(qualified),
        name: name.to_string(),
        namespace: namespace.to_string(),
        declaration_file: view.declaration_file().unwrap_or_default().to_string(),
        attributes: extract_attributes(view.attributes())?,
        documentation: extract_documentation(view.documentation()),
        calls,
    })
}

fn walk_call(view: RPCCall<'_>) -> Result<RpcCall> {
    let request = required(view.request(), "RPCCall", "request")?;
    let response = required(view.response(), "RPCCall", "response")?;
    Ok(RpcCall {
        name: required(view.name(), "RPCCall", "name")?.to_string(),
        request: required(request.name(), "Object", "name")?.to_string(),
        response: required(response.name(), "Object", "name")?.to_string(),
        attributes: extract_attributes(view.attributes())?,
        documentation: extract_documentation(view.documentation()),
    })
}

//! The static table of admin endpoints.
//!
//! Every operation maps to exactly one descriptor. URLs are the base URL
//! followed by the suffix verbatim; there is no path templating.

use std::fmt;

use crate::http::HttpMethod;

/// Logical operations exposed by the admin API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Page,
    SaveOrEdit,
    Remove,
    UploadFile,
    UploadVideo,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Page,
        Operation::SaveOrEdit,
        Operation::Remove,
        Operation::UploadFile,
        Operation::UploadVideo,
    ];

    /// Wire-facing operation name, as the admin frontend calls it.
    pub fn name(self) -> &'static str {
        self.endpoint().name
    }

    pub fn endpoint(self) -> &'static Endpoint {
        match self {
            Operation::Page => &ENDPOINTS[0],
            Operation::SaveOrEdit => &ENDPOINTS[1],
            Operation::Remove => &ENDPOINTS[2],
            Operation::UploadFile => &ENDPOINTS[3],
            Operation::UploadVideo => &ENDPOINTS[4],
        }
    }

    /// Looks an operation up by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        ENDPOINTS
            .iter()
            .find(|endpoint| endpoint.name == name)
            .map(|endpoint| endpoint.operation)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the request body is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    Multipart,
}

/// Static description of one endpoint.
#[derive(Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub operation: Operation,
    pub name: &'static str,
    pub method: HttpMethod,
    pub suffix: &'static str,
    pub body: BodyKind,
}

impl Endpoint {
    pub fn url(&self, base_url: &str) -> String {
        format!("{base_url}{}", self.suffix)
    }
}

pub static ENDPOINTS: [Endpoint; 5] = [
    Endpoint {
        operation: Operation::Page,
        name: "page",
        method: HttpMethod::Post,
        suffix: "/product/page",
        body: BodyKind::Json,
    },
    Endpoint {
        operation: Operation::SaveOrEdit,
        name: "saveOrEdit",
        method: HttpMethod::Post,
        suffix: "/product/saveOrEdit",
        body: BodyKind::Json,
    },
    Endpoint {
        operation: Operation::Remove,
        name: "remove",
        method: HttpMethod::Post,
        suffix: "/product/remove",
        body: BodyKind::Json,
    },
    Endpoint {
        operation: Operation::UploadFile,
        name: "uploadFile",
        method: HttpMethod::Post,
        suffix: "/common/upload/file",
        body: BodyKind::Multipart,
    },
    Endpoint {
        operation: Operation::UploadVideo,
        name: "uploadVideo",
        method: HttpMethod::Post,
        suffix: "/common/upload/video",
        body: BodyKind::Multipart,
    },
];

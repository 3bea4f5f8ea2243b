use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VnicResource {
    pub id: String,
    pub private_ip: Option<String>,
    pub subnet_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubnetResource {
    pub id: String,
    pub display_name: Option<String>,
    pub cidr_block: Option<String>,
    pub vcn_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NsgResource {
    pub id: String,
    pub display_name: Option<String>,
    pub vcn_id: Option<String>,
}

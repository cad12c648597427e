use crate::engine::{ParseState, Scope, normalize_area};
use crate::error::RuleFault;
use crate::schema::Schema;

/// OSPFv2 only ever reports this address family.
pub const ADDRESS_FAMILY: &str = "ipv4";

/// VRF assumed when a section header does not name one.
pub const DEFAULT_VRF: &str = "default";

/// Multi-topology id used for every per-topology record.
pub const MT_ID: &str = "0";

pub const INTERFACES: &str = "interfaces";
pub const SHAM_LINKS: &str = "sham_links";
pub const VIRTUAL_LINKS: &str = "virtual_links";

/// Point the cursor at `vrf / address_family / instance` and create the
/// instance record.
pub fn enter_instance(st: &mut ParseState, vrf: Option<&str>, instance: &str) -> Result<(), RuleFault> {
    st.cursor.set_scope(Scope::Vrf, ["vrf", vrf.unwrap_or(DEFAULT_VRF)]);
    st.cursor.set_scope(Scope::AddressFamily, ["address_family", ADDRESS_FAMILY]);
    st.cursor.set_scope(Scope::Instance, ["instance", instance]);
    st.scope_node(Scope::Instance)?;
    Ok(())
}

/// Point the cursor at an area (normalized) and create the area record.
/// Returns the area key.
pub fn enter_area(st: &mut ParseState, raw: &str) -> Result<String, RuleFault> {
    let area = normalize_area(raw);
    st.cursor.set_scope(Scope::Area, ["areas", area.as_str()]);
    st.scope_node(Scope::Area)?;
    Ok(area)
}

/// Which collection an interface-like name belongs to, and the short name
/// recorded for it: `OSPF_SL0` is sham link `SL0`, `OSPF_VL3` is virtual link
/// `VL3`, anything else is a plain interface.
pub fn classify_interface(interface: &str) -> (&'static str, String) {
    let pseudo = crate::regex!(r"^\S+_(?P<kind>SL|VL)(?P<num>\d+)$");
    match pseudo.captures(interface) {
        Some(caps) => {
            let kind = &caps["kind"];
            let collection = if kind == "SL" { SHAM_LINKS } else { VIRTUAL_LINKS };
            (collection, format!("{kind}{}", &caps["num"]))
        }
        None => (INTERFACES, interface.to_string()),
    }
}

/// Wrap per-instance schema in the `vrf / address_family / instance` levels.
pub fn per_instance(instance: impl Into<Schema>) -> Schema {
    Schema::map()
        .req(
            "vrf",
            Schema::any(Schema::map().req(
                "address_family",
                Schema::any(Schema::map().req("instance", Schema::any(instance))),
            )),
        )
        .into()
}

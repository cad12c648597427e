//! `show ospf vrf all-inclusive database {router|network|summary|external|opaque-area}`
//!
//! One rule table serves all five LSA kinds. An LSA block prints its header
//! fields (age, options, link state id, opaque type and id) *before* the
//! `Advertising Router` line that identifies it, so those fields wait in the
//! cursor and are attached when the LSA record is created:
//!
//! ```text
//! Router Link States (Area 0)            Area + Collection  lsa_types / 1
//!   Routing Bit Set on this LSA          var routing_bit
//!   LS age: 1802                         var age
//!   Options: (No TOS-capability, DC)     var option_desc
//!   Link State ID: 1.1.1.1               var lsa_id
//!   Advertising Router: 1.1.1.1          Entry  lsas / "1.1.1.1 1.1.1.1"
//!                                        views  header, body, topology
//!   LS Seq Number: 8000003d              -> header
//!   (Link ID) Neighboring Router ID: ..  Detail links / <id>, view topology
//!   TOS 0 Metrics: 1                     -> topology
//! ```
//!
//! Pending header fields are bound to the entry level, so they are dropped as
//! soon as the LSA they belong to has been created and never leak into the
//! next one.

use crate::Rule;
use crate::engine::{Scope, composite_key, prefix_mask};
use crate::error::RuleFault;
use crate::rules::ospf::helpers::{MT_ID, enter_area, enter_instance, per_instance};
use crate::schema::Schema;

/// Which database listing the rules are reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LsaKind {
    Router,
    Network,
    Summary,
    External,
    Opaque,
}

impl LsaKind {
    /// LSA type number.
    pub fn code(self) -> i64 {
        match self {
            LsaKind::Router => 1,
            LsaKind::Network => 2,
            LsaKind::Summary => 3,
            LsaKind::External => 5,
            LsaKind::Opaque => 10,
        }
    }

    /// Key of the LSA body record.
    pub fn body(self) -> &'static str {
        match self {
            LsaKind::Router => "router",
            LsaKind::Network => "network",
            LsaKind::Summary => "summary",
            LsaKind::External => "external",
            LsaKind::Opaque => "opaque",
        }
    }

    fn has_topology(self) -> bool {
        matches!(self, LsaKind::Summary | LsaKind::External)
    }
}

/// OSPF Router with ID (3.3.3.3) (Process ID 1, VRF VRF1)
fn rule_router() -> Rule {
    rule! {
        name: "database router id",
        pattern: r"^OSPF +Router +with +ID +\((?P<router_id>\S+)\) +\(Process +ID +(?P<instance>\d+)(?:, +VRF +(?P<vrf>\S+))?\)$",
        action: |caps, st| {
            enter_instance(st, caps.opt_text("vrf"), caps.text("instance")?)
        },
    }
}

/// Router Link States (Area 0)
/// Type-5 AS External Link States
///
/// External LSAs are AS-wide and are filed under the backbone.
fn rule_link_states(kind: LsaKind) -> Rule {
    rule! {
        name: "link states section",
        pattern: r"^(?P<name>.*) +Link +States(?: +\(Area +(?P<area>\S+)\))?$",
        action: |caps, st| {
            enter_area(st, caps.opt_text("area").unwrap_or("0"))?;
            let code = kind.code().to_string();
            st.cursor.set_scope(Scope::Collection, ["database", "lsa_types", code.as_str()]);
            st.scope_node(Scope::Collection)?.insert("lsa_type", kind.code());
            Ok(())
        },
    }
}

/// Routing Bit Set on this LSA
fn rule_routing_bit() -> Rule {
    rule! {
        name: "lsa routing bit",
        pattern: r"^Routing +Bit +Set +on +this +LSA$",
        action: |_caps, st| {
            st.cursor.set_var(Scope::Entry, "routing_bit", true);
            Ok(())
        },
    }
}

/// LS age: 1565
fn rule_age() -> Rule {
    rule! {
        name: "lsa age",
        pattern: r"^LS +age: +(?P<age>\d+)$",
        action: |caps, st| {
            st.cursor.set_var(Scope::Entry, "age", caps.int("age")?);
            Ok(())
        },
    }
}

/// Options: 0x20 (No TOS-capability, DC)
/// Options: (No TOS-capability, DC)
fn rule_options() -> Rule {
    rule! {
        name: "lsa options",
        pattern: r"^Options:(?: +(?P<option>[a-zA-Z0-9]+))?(?: *\((?P<desc>.*)\))?$",
        action: |caps, st| {
            if let Some(option) = caps.opt_text("option") {
                st.cursor.set_var(Scope::Entry, "option", option);
            }
            if let Some(desc) = caps.opt_text("desc") {
                st.cursor.set_var(Scope::Entry, "option_desc", desc);
            }
            Ok(())
        },
    }
}

/// LS Type: Router Links
///
/// The type number comes from the command, not from this text.
fn rule_ls_type() -> Rule {
    rule! {
        name: "lsa type",
        pattern: r"^LS +Type: +.*$",
        action: |_caps, _st| {
            Ok(())
        },
    }
}

/// Link State ID: 10.1.2.1 (Designated Router address)
fn rule_lsa_id() -> Rule {
    rule! {
        name: "link state id",
        pattern: r"^Link +State +ID: +(?P<lsa_id>\S+)(?: +\(.*\))?$",
        action: |caps, st| {
            st.cursor.set_var(Scope::Entry, "lsa_id", caps.text("lsa_id")?);
            Ok(())
        },
    }
}

/// Opaque Type: 1
fn rule_opaque_type() -> Rule {
    rule! {
        name: "opaque type",
        pattern: r"^Opaque +Type: +(?P<type>\d+)$",
        action: |caps, st| {
            st.cursor.set_var(Scope::Entry, "opaque_type", caps.int("type")?);
            Ok(())
        },
    }
}

/// Opaque ID: 38
fn rule_opaque_id() -> Rule {
    rule! {
        name: "opaque id",
        pattern: r"^Opaque +ID: +(?P<id>\d+)$",
        action: |caps, st| {
            st.cursor.set_var(Scope::Entry, "opaque_id", caps.int("id")?);
            Ok(())
        },
    }
}

/// Advertising Router: 4.4.4.4
///
/// Creates the LSA keyed `"<link state id> <advertising router>"` and
/// flushes the pending header fields into it.
fn rule_advertising_router(kind: LsaKind) -> Rule {
    rule! {
        name: "advertising router",
        pattern: r"^Advertising +Router: +(?P<adv_router>\S+)$",
        action: |caps, st| {
            let adv_router = caps.text("adv_router")?;
            let lsa_id = st.cursor.text_var("lsa_id")?.to_string();
            let pending: Vec<_> = [
                ("routing_bit_enable", "routing_bit"),
                ("age", "age"),
                ("option", "option"),
                ("option_desc", "option_desc"),
                ("opaque_type", "opaque_type"),
                ("opaque_id", "opaque_id"),
            ]
            .into_iter()
            .filter_map(|(key, var)| st.cursor.try_var(var).cloned().map(|value| (key, value)))
            .collect();

            st.cursor.set_scope(Scope::Entry, ["lsas".to_string(), composite_key(&lsa_id, adv_router)]);
            let entry = st.cursor.path(Scope::Entry)?;
            let lsa = st.scope_node(Scope::Entry)?;
            lsa.insert("adv_router", adv_router);
            lsa.insert("lsa_id", lsa_id.as_str());

            let body = entry.join(["ospfv2", "body", kind.body()]);
            let header = entry.join(["ospfv2", "header"]);
            st.node_mut(&body)?;
            if kind.has_topology() {
                let topology = body.join(["topologies", MT_ID]);
                st.node_mut(&topology)?.insert("mt_id", 0);
                st.cursor.set_view(Scope::Entry, "topology", topology);
            }

            let header_node = st.node_mut(&header)?;
            for (key, value) in pending {
                header_node.insert(key, value);
            }
            header_node.insert("type", kind.code());
            header_node.insert("lsa_id", lsa_id);
            header_node.insert("adv_router", adv_router);

            st.cursor.set_view(Scope::Entry, "body", body);
            st.cursor.set_view(Scope::Entry, "header", header);
            st.cursor.set_var(Scope::Entry, "link_tlvs", 0);
            st.cursor.set_var(Scope::Entry, "unknown_tlvs", 0);
            Ok(())
        },
    }
}

/// LS Seq Number: 0x80000002
fn rule_seq_num() -> Rule {
    rule! {
        name: "lsa sequence number",
        pattern: r"^LS +Seq +Number: +(?P<seq>\S+)$",
        action: |caps, st| {
            st.view_node("header")?.insert("seq_num", caps.text("seq")?);
            Ok(())
        },
    }
}

/// Checksum: 0x7d61
fn rule_checksum() -> Rule {
    rule! {
        name: "lsa checksum",
        pattern: r"^Checksum: +(?P<checksum>\S+)$",
        action: |caps, st| {
            st.view_node("header")?.insert("checksum", caps.text("checksum")?);
            Ok(())
        },
    }
}

/// Length: 36
fn rule_length() -> Rule {
    rule! {
        name: "lsa length",
        pattern: r"^Length: +(?P<length>\d+)$",
        action: |caps, st| {
            st.view_node("header")?.insert("length", caps.int("length")?);
            Ok(())
        },
    }
}

/// Network Mask: /32
fn rule_network_mask() -> Rule {
    rule! {
        name: "network mask",
        pattern: r"^Network +Mask: +/(?P<len>\d+)$",
        action: |caps, st| {
            let len = caps.int("len")?;
            let mask = u32::try_from(len)
                .ok()
                .and_then(prefix_mask)
                .ok_or_else(|| RuleFault::InvalidNumber { group: "len", value: len.to_string() })?;
            st.view_node("body")?.insert("network_mask", mask);
            Ok(())
        },
    }
}

/// Metric Type: 2 (Larger than any link state path)
fn rule_metric_type() -> Rule {
    rule! {
        name: "external metric type 2",
        pattern: r"^Metric +Type: +2 +\(.*\)$",
        action: |_caps, st| {
            st.view_node("topology")?.insert("flags", "E");
            Ok(())
        },
    }
}

/// TOS: 0
/// TOS 0 Metrics: 1
fn rule_tos() -> Rule {
    rule! {
        name: "tos and metric",
        pattern: r"^TOS:? +(?P<tos>\d+)(?: +Metrics?: +(?P<metric>\d+))?$",
        action: |caps, st| {
            let topology = st.view_node("topology")?;
            topology.insert("tos", caps.int("tos")?);
            if let Some(metric) = caps.opt_int("metric")? {
                topology.insert("metric", metric);
            }
            Ok(())
        },
    }
}

/// Metric: 20
fn rule_metric() -> Rule {
    rule! {
        name: "metric",
        pattern: r"^Metric: +(?P<metric>\d+)$",
        action: |caps, st| {
            st.view_node("topology")?.insert("metric", caps.int("metric")?);
            Ok(())
        },
    }
}

/// Forward Address: 0.0.0.0
fn rule_forward_address() -> Rule {
    rule! {
        name: "forward address",
        pattern: r"^Forward +Address: +(?P<addr>\S+)$",
        action: |caps, st| {
            st.view_node("topology")?.insert("forwarding_address", caps.text("addr")?);
            Ok(())
        },
    }
}

/// External Route Tag: 0
fn rule_route_tag() -> Rule {
    rule! {
        name: "external route tag",
        pattern: r"^External +Route +Tag: +(?P<tag>\S+)$",
        action: |caps, st| {
            st.view_node("topology")?.insert("external_route_tag", caps.text("tag")?);
            Ok(())
        },
    }
}

/// Attached Router: 66.66.66.66
fn rule_attached_router() -> Rule {
    rule! {
        name: "attached router",
        pattern: r"^Attached +Router: +(?P<router>\S+)$",
        action: |caps, st| {
            st.view_node("body")?.child_mut("attached_routers")?.child_mut(caps.text("router")?)?;
            Ok(())
        },
    }
}

/// Number of Links: 3
fn rule_num_links() -> Rule {
    rule! {
        name: "router lsa link count",
        pattern: r"^Number +of +[lL]inks: +(?P<num>\d+)$",
        action: |caps, st| {
            st.view_node("body")?.insert("num_of_links", caps.int("num")?);
            Ok(())
        },
    }
}

/// Link connected to: a Stub Network
fn rule_link_type() -> Rule {
    rule! {
        name: "router lsa link type",
        pattern: r"^Link +connected +to: +a +(?P<type>.*)$",
        action: |caps, st| {
            st.cursor.set_var(Scope::Detail, "link_type", caps.text("type")?.to_lowercase());
            Ok(())
        },
    }
}

/// (Link ID) Network/subnet number: 1.1.1.1
/// (Link ID) Designated Router address: 20.6.7.6
/// (Link ID) Neighboring Router ID: 22.22.22.22
fn rule_link_id(kind: LsaKind) -> Rule {
    rule! {
        name: "router lsa link id",
        pattern: r"^\(Link +ID\) +(?:Network/[sS]ubnet +[nN]umber|[dD]esignated +[rR]outer +[aA]ddress|[nN]eighboring +[rR]outer +[iI][dD]): +(?P<link_id>\S+)$",
        action: |caps, st| {
            let link_id = caps.text("link_id")?;
            let link_type = st.cursor.try_var("link_type").cloned();

            st.cursor.set_scope(Scope::Detail, ["ospfv2", "body", kind.body(), "links", link_id]);
            let detail = st.cursor.path(Scope::Detail)?;
            let link = st.scope_node(Scope::Detail)?;
            link.insert("link_id", link_id);
            if let Some(link_type) = link_type {
                link.insert("type", link_type);
            }
            let topology = detail.join(["topologies", MT_ID]);
            st.node_mut(&topology)?.insert("mt_id", 0);
            st.cursor.set_view(Scope::Detail, "topology", topology);
            Ok(())
        },
    }
}

/// (Link Data) Network Mask: 255.255.255.255
/// (Link Data) Router Interface address: 20.6.7.6
fn rule_link_data() -> Rule {
    rule! {
        name: "router lsa link data",
        pattern: r"^\(Link +Data\) +(?:Network +Mask|Router +Interface +address): +(?P<data>\S+)$",
        action: |caps, st| {
            st.scope_node(Scope::Detail)?.insert("link_data", caps.text("data")?);
            Ok(())
        },
    }
}

/// Number of TOS metrics: 0
fn rule_num_tos() -> Rule {
    rule! {
        name: "router lsa tos metric count",
        pattern: r"^Number +of +TOS +metrics: +(?P<num>\d+)$",
        action: |caps, st| {
            st.scope_node(Scope::Detail)?.insert("num_tos_metrics", caps.int("num")?);
            Ok(())
        },
    }
}

/// Fragment number: 0
fn rule_fragment() -> Rule {
    rule! {
        name: "opaque fragment number",
        pattern: r"^Fragment +number: +(?P<num>\d+)$",
        action: |caps, st| {
            st.view_node("header")?.insert("fragment_number", caps.int("num")?);
            Ok(())
        },
    }
}

/// MPLS TE router ID : 1.1.1.1
fn rule_te_router_id() -> Rule {
    rule! {
        name: "opaque te router id",
        pattern: r"^MPLS +TE +router +ID *: +(?P<id>\S+)$",
        action: |caps, st| {
            st.view_node("header")?.insert("mpls_te_router_id", caps.text("id")?);
            Ok(())
        },
    }
}

/// AS Boundary Router
fn rule_asbr() -> Rule {
    rule! {
        name: "as boundary router",
        pattern: r"^AS +Boundary +Router$",
        action: |_caps, st| {
            st.view_node("header")?.insert("as_boundary_router", true);
            Ok(())
        },
    }
}

/// Area Border Router
fn rule_abr() -> Rule {
    rule! {
        name: "area border router",
        pattern: r"^Area +Border +Router$",
        action: |_caps, st| {
            st.view_node("header")?.insert("area_border_router", true);
            Ok(())
        },
    }
}

/// Link connected to Broadcast network
///
/// Opens the next link TLV. TLVs are numbered from 1 within each LSA.
fn rule_link_tlv(kind: LsaKind) -> Rule {
    rule! {
        name: "opaque link tlv",
        pattern: r"^Link +connected +to +(?P<link>.*)$",
        action: |caps, st| {
            let number = st.cursor.int_var("link_tlvs")? + 1;
            st.cursor.set_var(Scope::Entry, "link_tlvs", number);

            let name = caps.text("link")?.to_lowercase();
            let broadcast = name == "broadcast network";
            let number = number.to_string();
            st.cursor.set_scope(Scope::Detail, ["ospfv2", "body", kind.body(), "link_tlvs", number.as_str()]);
            let tlv = st.scope_node(Scope::Detail)?;
            tlv.insert("link_type", if broadcast { 2 } else { 1 });
            tlv.insert("link_name", name);
            if broadcast {
                tlv.child_mut("remote_if_ipv4_addrs")?.child_mut("0.0.0.0")?;
            }
            Ok(())
        },
    }
}

/// Link ID : 10.1.4.4
fn rule_tlv_link_id() -> Rule {
    rule! {
        name: "opaque link id",
        pattern: r"^Link +ID *: +(?P<id>\S+)$",
        action: |caps, st| {
            st.scope_node(Scope::Detail)?.insert("link_id", caps.text("id")?);
            Ok(())
        },
    }
}

/// Interface Address : 10.1.4.1
fn rule_tlv_interface_address() -> Rule {
    rule! {
        name: "opaque interface address",
        pattern: r"^Interface +Address *: +(?P<addr>\S+)$",
        action: |caps, st| {
            st.scope_node(Scope::Detail)?.child_mut("local_if_ipv4_addrs")?.child_mut(caps.text("addr")?)?;
            Ok(())
        },
    }
}

/// Admin Metric : 1
fn rule_tlv_admin_metric() -> Rule {
    rule! {
        name: "opaque te metric",
        pattern: r"^Admin +Metric *: +(?P<metric>\d+)$",
        action: |caps, st| {
            st.scope_node(Scope::Detail)?.insert("te_metric", caps.int("metric")?);
            Ok(())
        },
    }
}

/// Maximum Bandwidth : 125000000
fn rule_tlv_max_bandwidth() -> Rule {
    rule! {
        name: "opaque maximum bandwidth",
        pattern: r"^Maximum +[bB]andwidth *: +(?P<bw>\d+)$",
        action: |caps, st| {
            st.scope_node(Scope::Detail)?.insert("max_bandwidth", caps.int("bw")?);
            Ok(())
        },
    }
}

/// Maximum reservable bandwidth global: 93750000
fn rule_tlv_max_reservable() -> Rule {
    rule! {
        name: "opaque maximum reservable bandwidth",
        pattern: r"^Maximum +[rR]eservable +[bB]andwidth(?: +global)? *: +(?P<bw>\d+)$",
        action: |caps, st| {
            st.scope_node(Scope::Detail)?.insert("max_reservable_bandwidth", caps.int("bw")?);
            Ok(())
        },
    }
}

/// Affinity Bit : 0x0
fn rule_tlv_affinity() -> Rule {
    rule! {
        name: "opaque admin group",
        pattern: r"^Affinity +Bit *: +(?P<group>\S+)$",
        action: |caps, st| {
            st.scope_node(Scope::Detail)?.insert("admin_group", caps.text("group")?);
            Ok(())
        },
    }
}

/// IGP Metric : 1
fn rule_tlv_igp_metric() -> Rule {
    rule! {
        name: "opaque igp metric",
        pattern: r"^IGP +Metric *: +(?P<metric>\d+)$",
        action: |caps, st| {
            st.scope_node(Scope::Detail)?.insert("igp_metric", caps.int("metric")?);
            Ok(())
        },
    }
}

/// Number of Priority : 8
fn rule_tlv_total_priority() -> Rule {
    rule! {
        name: "opaque priority count",
        pattern: r"^Number +of +Priority *: +(?P<num>\d+)$",
        action: |caps, st| {
            st.scope_node(Scope::Detail)?.insert("total_priority", caps.int("num")?);
            Ok(())
        },
    }
}

/// Priority 0 : 93750000    Priority 1 : 93750000
///
/// The second pair is missing on the last line of an odd count.
fn rule_tlv_unreserved() -> Rule {
    rule! {
        name: "opaque unreserved bandwidth",
        pattern: r"^Priority +(?P<p1>\d+) *: +(?P<bw1>\d+)(?: +Priority +(?P<p2>\d+) *: +(?P<bw2>\d+))?$",
        action: |caps, st| {
            let bandwidths = st.scope_node(Scope::Detail)?.child_mut("unreserved_bandwidths")?;
            for (priority, bandwidth) in [("p1", "bw1"), ("p2", "bw2")] {
                let (Some(p), Some(bw)) = (caps.opt_text(priority), caps.opt_text(bandwidth)) else {
                    continue;
                };
                let key = composite_key(p, bw);
                if bandwidths.contains_key(&key) {
                    continue;
                }
                let entry = bandwidths.child_mut(&key)?;
                entry.insert("priority", caps.int(priority)?);
                entry.insert("unreserved_bandwidth", caps.int(bandwidth)?);
            }
            Ok(())
        },
    }
}

/// Unknown Sub-TLV   :  Type = 32770, Length = 4 Value = 00 00 00 01
fn rule_tlv_unknown() -> Rule {
    rule! {
        name: "opaque unknown sub-tlv",
        pattern: r"^Unknown +Sub-TLV *: +Type += +(?P<type>\d+), +Length += +(?P<length>\d+) +Value += +(?P<value>.*)$",
        action: |caps, st| {
            let number = st.cursor.int_var("unknown_tlvs")? + 1;
            st.cursor.set_var(Scope::Entry, "unknown_tlvs", number);
            let tlv = st.scope_node(Scope::Detail)?.child_mut("unknown_tlvs")?.child_mut(&number.to_string())?;
            tlv.insert("type", caps.int("type")?);
            tlv.insert("length", caps.int("length")?);
            tlv.insert("value", caps.text("value")?);
            Ok(())
        },
    }
}

/// Extended Administrative Group : Length: 8
fn rule_tlv_eag_length() -> Rule {
    rule! {
        name: "opaque extended admin group length",
        pattern: r"^Extended +Administrative +Group *: +Length *: +(?P<length>\d+)$",
        action: |caps, st| {
            st.scope_node(Scope::Detail)?
                .child_mut("extended_admin_group")?
                .insert("length", caps.int("length")?);
            Ok(())
        },
    }
}

/// EAG[0]: 0
fn rule_tlv_eag() -> Rule {
    rule! {
        name: "opaque extended admin group",
        pattern: r"^EAG\[(?P<index>\d+)\]: +(?P<value>\d+)$",
        action: |caps, st| {
            let index = caps.int("index")?.to_string();
            st.scope_node(Scope::Detail)?
                .child_mut("extended_admin_group")?
                .child_mut("groups")?
                .child_mut(&index)?
                .insert("value", caps.int("value")?);
            Ok(())
        },
    }
}

pub fn get(kind: LsaKind) -> Vec<Rule> {
    vec![
        rule_router(),
        rule_link_states(kind),
        rule_routing_bit(),
        rule_age(),
        rule_options(),
        rule_ls_type(),
        rule_lsa_id(),
        rule_opaque_type(),
        rule_opaque_id(),
        rule_advertising_router(kind),
        rule_seq_num(),
        rule_checksum(),
        rule_length(),
        rule_network_mask(),
        rule_metric_type(),
        rule_tos(),
        rule_metric(),
        rule_forward_address(),
        rule_route_tag(),
        rule_attached_router(),
        rule_num_links(),
        rule_link_type(),
        rule_link_id(kind),
        rule_link_data(),
        rule_num_tos(),
        rule_fragment(),
        rule_te_router_id(),
        rule_asbr(),
        rule_abr(),
        rule_link_tlv(kind),
        rule_tlv_link_id(),
        rule_tlv_interface_address(),
        rule_tlv_admin_metric(),
        rule_tlv_max_bandwidth(),
        rule_tlv_max_reservable(),
        rule_tlv_affinity(),
        rule_tlv_igp_metric(),
        rule_tlv_total_priority(),
        rule_tlv_unreserved(),
        rule_tlv_unknown(),
        rule_tlv_eag_length(),
        rule_tlv_eag(),
    ]
}

fn header(kind: LsaKind) -> Schema {
    let header = Schema::map()
        .opt("option", Schema::text())
        .req("option_desc", Schema::text())
        .req("lsa_id", Schema::text())
        .req("age", Schema::int())
        .req("type", Schema::int())
        .req("adv_router", Schema::text())
        .req("seq_num", Schema::text())
        .req("checksum", Schema::text())
        .req("length", Schema::int())
        .opt("routing_bit_enable", Schema::boolean());
    match kind {
        LsaKind::Router => header
            .opt("as_boundary_router", Schema::boolean())
            .opt("area_border_router", Schema::boolean())
            .into(),
        LsaKind::Opaque => header
            .req("opaque_type", Schema::int())
            .req("opaque_id", Schema::int())
            .opt("fragment_number", Schema::int())
            .opt("mpls_te_router_id", Schema::text())
            .opt("num_links", Schema::int())
            .into(),
        _ => header.into(),
    }
}

fn body(kind: LsaKind) -> Schema {
    match kind {
        LsaKind::Router => {
            let topology = Schema::map().req("mt_id", Schema::int()).opt("metric", Schema::int()).opt("tos", Schema::int());
            let link = Schema::map()
                .req("link_id", Schema::text())
                .req("link_data", Schema::text())
                .req("type", Schema::text())
                .req("num_tos_metrics", Schema::int())
                .req("topologies", Schema::any(topology));
            Schema::map()
                .opt("flags", Schema::text())
                .req("num_of_links", Schema::int())
                .req("links", Schema::any(link))
                .into()
        }
        LsaKind::Network => Schema::map()
            .req("network_mask", Schema::text())
            .req("attached_routers", Schema::any(Schema::empty()))
            .into(),
        LsaKind::Summary => {
            let topology = Schema::map().req("mt_id", Schema::int()).req("tos", Schema::int()).req("metric", Schema::int());
            Schema::map()
                .req("network_mask", Schema::text())
                .req("topologies", Schema::any(topology))
                .into()
        }
        LsaKind::External => {
            let topology = Schema::map()
                .req("mt_id", Schema::int())
                .req("tos", Schema::int())
                .req("flags", Schema::text())
                .req("metric", Schema::int())
                .req("forwarding_address", Schema::text())
                .req("external_route_tag", Schema::text());
            Schema::map()
                .req("network_mask", Schema::text())
                .req("topologies", Schema::any(topology))
                .into()
        }
        LsaKind::Opaque => {
            let bandwidth = Schema::map().req("priority", Schema::int()).req("unreserved_bandwidth", Schema::int());
            let unknown = Schema::map().req("type", Schema::int()).req("length", Schema::int()).req("value", Schema::text());
            let eag = Schema::map()
                .req("length", Schema::int())
                .opt("groups", Schema::any(Schema::map().req("value", Schema::int())));
            let tlv = Schema::map()
                .req("link_type", Schema::int())
                .req("link_name", Schema::text())
                .req("link_id", Schema::text())
                .req("te_metric", Schema::int())
                .req("max_bandwidth", Schema::int())
                .req("max_reservable_bandwidth", Schema::int())
                .req("admin_group", Schema::text())
                .opt("igp_metric", Schema::int())
                .opt("total_priority", Schema::int())
                .opt("local_if_ipv4_addrs", Schema::any(Schema::empty()))
                .opt("remote_if_ipv4_addrs", Schema::any(Schema::empty()))
                .opt("unreserved_bandwidths", Schema::any(bandwidth))
                .opt("unknown_tlvs", Schema::any(unknown))
                .opt("extended_admin_group", eag);
            Schema::map().opt("link_tlvs", Schema::any(tlv)).into()
        }
    }
}

pub fn schema(kind: LsaKind) -> Schema {
    let lsa = Schema::map()
        .req("lsa_id", Schema::text())
        .req("adv_router", Schema::text())
        .req(
            "ospfv2",
            Schema::map().req("header", header(kind)).req("body", Schema::map().req(kind.body(), body(kind))),
        );
    let lsa_type = Schema::map().req("lsa_type", Schema::int()).req("lsas", Schema::any(lsa));
    let area = Schema::map().req("database", Schema::map().req("lsa_types", Schema::any(lsa_type)));
    let instance = match kind {
        LsaKind::Opaque => Schema::map().opt("areas", Schema::any(area)),
        _ => Schema::map().req("areas", Schema::any(area)),
    };
    per_instance(instance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatchPolicy;

    #[test]
    fn lsa_codes_follow_the_ospf_type_numbers() {
        let codes: Vec<i64> =
            [LsaKind::Router, LsaKind::Network, LsaKind::Summary, LsaKind::External, LsaKind::Opaque]
                .into_iter()
                .map(LsaKind::code)
                .collect();
        assert_eq!(codes, vec![1, 2, 3, 5, 10]);
    }

    #[test]
    fn only_summary_and_external_carry_a_body_topology() {
        assert!(LsaKind::Summary.has_topology());
        assert!(LsaKind::External.has_topology());
        assert!(!LsaKind::Router.has_topology());
        assert!(!LsaKind::Opaque.has_topology());
    }

    #[test]
    fn every_database_line_stops_at_its_first_rule() {
        for kind in [LsaKind::Router, LsaKind::Network, LsaKind::Summary, LsaKind::External, LsaKind::Opaque] {
            let continuing: Vec<_> =
                get(kind).into_iter().filter(|rule| rule.policy == MatchPolicy::Continue).map(|rule| rule.name).collect();
            assert!(continuing.is_empty(), "{kind:?}: {continuing:?}");
        }
    }
}

//! `show ospf mpls traffic-eng links`

use crate::Rule;
use crate::engine::{Scope, composite_key};
use crate::rules::ospf::helpers::{enter_area, enter_instance, per_instance};
use crate::schema::Schema;

/// OSPF Router with ID (3.3.3.3) (Process ID 1)
fn rule_router() -> Rule {
    rule! {
        name: "te router id",
        pattern: r"^OSPF +Router +with +ID +\((?P<router_id>\S+)\) +\(Process +ID +(?P<instance>\S+)\)$",
        action: |caps, st| {
            enter_instance(st, None, caps.text("instance")?)?;
            st.scope_node(Scope::Instance)?
                .child_mut("mpls")?
                .child_mut("te")?
                .insert("router_id", caps.text("router_id")?);
            Ok(())
        },
    }
}

/// Area 0 has 2 MPLS TE links. Area instance is 2.
fn rule_area_enabled() -> Rule {
    rule! {
        name: "te area enabled",
        pattern: r"^Area +(?P<area>\S+) +has +(?P<links>\d+) +MPLS +TE +links\. +Area +instance +is +(?P<instance>\d+)\.$",
        action: |caps, st| {
            enter_area(st, caps.text("area")?)?;
            st.cursor.set_scope(Scope::Collection, ["mpls", "te"]);
            let te = st.scope_node(Scope::Collection)?;
            te.insert("enable", true);
            te.insert("total_links", caps.int("links")?);
            te.insert("area_instance", caps.int("instance")?);
            Ok(())
        },
    }
}

/// Area 1 MPLS TE not initialized
fn rule_area_disabled() -> Rule {
    rule! {
        name: "te area not initialized",
        pattern: r"^Area +(?P<area>\d+) +MPLS +TE +not +initialized$",
        action: |caps, st| {
            enter_area(st, caps.text("area")?)?;
            st.cursor.set_scope(Scope::Collection, ["mpls", "te"]);
            st.scope_node(Scope::Collection)?.insert("enable", false);
            Ok(())
        },
    }
}

/// Link is associated with fragment 1. Link instance is 2
fn rule_fragment() -> Rule {
    rule! {
        name: "te link fragment",
        pattern: r"^Link +is +associated +with +fragment +(?P<fragment>\d+)\. +Link +instance +is +(?P<instance>\d+)$",
        action: |caps, st| {
            let fragment = caps.int("fragment")?.to_string();
            st.cursor.set_scope(Scope::Entry, ["link_fragments", fragment.as_str()]);
            st.scope_node(Scope::Entry)?.insert("link_instance", caps.int("instance")?);
            Ok(())
        },
    }
}

/// Link connected to Broadcast network
fn rule_network_type() -> Rule {
    rule! {
        name: "te link network type",
        pattern: r"^Link +connected +to +(?P<net>\S+) +network$",
        action: |caps, st| {
            st.scope_node(Scope::Entry)?.insert("network_type", caps.text("net")?.to_lowercase());
            Ok(())
        },
    }
}

/// Single-field `Label : N` lines. Each pairs a pattern with the key it
/// writes on the current fragment.
macro_rules! fragment_field {
    ($fn_name:ident, $name:literal, $pattern:literal, $key:literal, text) => {
        fn $fn_name() -> Rule {
            rule! {
                name: $name,
                pattern: $pattern,
                action: |caps, st| {
                    st.scope_node(Scope::Entry)?.insert($key, caps.text("value")?);
                    Ok(())
                },
            }
        }
    };
    ($fn_name:ident, $name:literal, $pattern:literal, $key:literal, int) => {
        fn $fn_name() -> Rule {
            rule! {
                name: $name,
                pattern: $pattern,
                action: |caps, st| {
                    st.scope_node(Scope::Entry)?.insert($key, caps.int("value")?);
                    Ok(())
                },
            }
        }
    };
}

// Link ID : 10.3.4.4
fragment_field!(rule_link_id, "te link id", r"^Link +ID *: +(?P<value>\S+)$", "link_id", text);
// Interface Address : 10.3.4.3
fragment_field!(rule_interface_address, "te interface address", r"^Interface +Address *: +(?P<value>\S+)$", "interface_address", text);
// Admin Metric : TE: 1
fragment_field!(rule_admin_metric, "te admin metric", r"^Admin +Metric *: +TE *: +(?P<value>\d+)$", "te_admin_metric", int);
// Maximum bandwidth : 125000000
fragment_field!(rule_max_bandwidth, "te maximum bandwidth", r"^Maximum +bandwidth *: +(?P<value>\d+)$", "maximum_bandwidth", int);
// Maximum global pool reservable bandwidth : 93750000
fragment_field!(
    rule_max_reservable,
    "te maximum reservable bandwidth",
    r"^Maximum +global +pool +reservable +bandwidth *: +(?P<value>\d+)$",
    "maximum_reservable_bandwidth",
    int
);
// Number of Priority : 8
fragment_field!(rule_total_priority, "te number of priority", r"^Number +of +Priority *: +(?P<value>\d+)$", "total_priority", int);
// Out Interface ID : 4
fragment_field!(rule_out_interface, "te out interface id", r"^Out +Interface +ID *: +(?P<value>\d+)$", "out_interface_id", int);
// Affinity Bit : 0
fragment_field!(rule_affinity, "te affinity bit", r"^Affinity +Bit *: +(?P<value>\d+)$", "affinity_bit", int);
// Extended Admin Group : 8
fragment_field!(rule_eag_total, "te extended admin group count", r"^Extended +Admin +Group *: +(?P<value>\d+)$", "total_extended_admin_group", int);

/// Priority 0 :             93750000  Priority 1 :           93750000
///
/// Two priorities per line, each keyed `"<priority> <bandwidth>"`.
fn rule_unreserved() -> Rule {
    rule! {
        name: "te unreserved bandwidth pair",
        pattern: r"^Priority +(?P<p1>\d+) *: +(?P<bw1>\d+) *Priority +(?P<p2>\d+) *: +(?P<bw2>\d+)$",
        action: |caps, st| {
            let bandwidths = st.scope_node(Scope::Entry)?.child_mut("unreserved_bandwidths")?;
            for (priority, bandwidth) in [("p1", "bw1"), ("p2", "bw2")] {
                let key = composite_key(caps.text(priority)?, caps.text(bandwidth)?);
                let entry = bandwidths.child_mut(&key)?;
                entry.insert("priority", caps.int(priority)?);
                entry.insert("unreserved_bandwidth", caps.int(bandwidth)?);
            }
            Ok(())
        },
    }
}

/// EAG[0]: 0
fn rule_eag() -> Rule {
    rule! {
        name: "te extended admin group",
        pattern: r"^EAG\[(?P<index>\d+)\]: +(?P<value>\d+)$",
        action: |caps, st| {
            let index = caps.int("index")?.to_string();
            st.scope_node(Scope::Entry)?
                .child_mut("extended_admin_groups")?
                .child_mut(&index)?
                .insert("value", caps.int("value")?);
            Ok(())
        },
    }
}

pub fn get() -> Vec<Rule> {
    vec![
        rule_router(),
        rule_area_enabled(),
        rule_area_disabled(),
        rule_fragment(),
        rule_network_type(),
        rule_link_id(),
        rule_interface_address(),
        rule_admin_metric(),
        rule_max_bandwidth(),
        rule_max_reservable(),
        rule_total_priority(),
        rule_unreserved(),
        rule_out_interface(),
        rule_affinity(),
        rule_eag_total(),
        rule_eag(),
    ]
}

pub fn schema() -> Schema {
    let fragment = Schema::map()
        .req("link_instance", Schema::int())
        .req("network_type", Schema::text())
        .req("link_id", Schema::text())
        .req("interface_address", Schema::text())
        .req("te_admin_metric", Schema::int())
        .req("maximum_bandwidth", Schema::int())
        .req("maximum_reservable_bandwidth", Schema::int())
        .req("total_priority", Schema::int())
        .req("out_interface_id", Schema::int())
        .req("affinity_bit", Schema::int())
        .req("total_extended_admin_group", Schema::int())
        .req(
            "unreserved_bandwidths",
            Schema::any(Schema::map().req("priority", Schema::int()).req("unreserved_bandwidth", Schema::int())),
        )
        .req("extended_admin_groups", Schema::any(Schema::map().req("value", Schema::int())));
    let te = Schema::map()
        .req("enable", Schema::boolean())
        .opt("total_links", Schema::int())
        .opt("area_instance", Schema::int())
        .opt("link_fragments", Schema::any(fragment));
    per_instance(
        Schema::map()
            .req("mpls", Schema::map().req("te", Schema::map().req("router_id", Schema::text())))
            .req("areas", Schema::any(Schema::map().req("mpls", Schema::map().req("te", te)))),
    )
}

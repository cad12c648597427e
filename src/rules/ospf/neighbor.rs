//! `show ospf vrf all-inclusive neighbor detail`

use crate::Rule;
use crate::engine::{Scope, composite_key, state_name};
use crate::rules::ospf::helpers::{INTERFACES, classify_interface, enter_area, enter_instance, per_instance};
use crate::schema::Schema;

/// Neighbors for OSPF 1, VRF VRF1
fn rule_instance() -> Rule {
    rule! {
        name: "neighbors for instance",
        pattern: r"^Neighbors +for +OSPF +(?P<instance>\S+)(?:, +VRF +(?P<vrf>\S+))?$",
        action: |caps, st| {
            enter_instance(st, caps.opt_text("vrf"), caps.text("instance")?)
        },
    }
}

/// Neighbor 2.2.2.2, interface address 10.2.3.2
fn rule_neighbor() -> Rule {
    rule! {
        name: "neighbor header",
        pattern: r"^Neighbor +(?P<neighbor>\S+), +interface +address +(?P<address>\S+)$",
        action: |caps, st| {
            st.cursor.set_var(Scope::Instance, "neighbor", caps.text("neighbor")?);
            st.cursor.set_var(Scope::Instance, "address", caps.text("address")?);
            Ok(())
        },
    }
}

/// In the area 0 via interface GigabitEthernet0/0/0/2
///
/// Sham and virtual link neighbors are keyed by `<area> <neighbor address>`.
fn rule_area() -> Rule {
    rule! {
        name: "neighbor area and interface",
        pattern: r"^In +the +area +(?P<area>\S+) +via +interface +(?P<interface>\S+)$",
        action: |caps, st| {
            let neighbor = st.cursor.text_var("neighbor")?.to_string();
            let address = st.cursor.text_var("address")?.to_string();
            let interface = caps.text("interface")?;

            let area = enter_area(st, caps.text("area")?)?;
            let (collection, _) = classify_interface(interface);
            let key = if collection == INTERFACES { interface.to_string() } else { composite_key(&area, &address) };

            st.cursor.set_scope(Scope::Collection, [collection]);
            st.cursor.set_scope(Scope::Entry, [key]);
            st.cursor.set_scope(Scope::Detail, ["neighbors", neighbor.as_str()]);
            let record = st.scope_node(Scope::Detail)?;
            record.insert("neighbor_router_id", neighbor);
            record.insert("address", address);
            Ok(())
        },
    }
}

/// Neighbor priority is 1, State is FULL, 6 state changes
fn rule_priority() -> Rule {
    rule! {
        name: "neighbor priority and state",
        pattern: r"^Neighbor +priority +is +(?P<priority>\d+), +State +is +(?P<state>\S+), +(?P<changes>\d+) +state +changes$",
        action: |caps, st| {
            let record = st.scope_node(Scope::Detail)?;
            record.insert("priority", caps.int("priority")?);
            record.insert("state", state_name(caps.text("state")?));
            record.insert("num_state_changes", caps.int("changes")?);
            Ok(())
        },
    }
}

/// DR is 10.2.3.3 BDR is 10.2.3.2
fn rule_dr() -> Rule {
    rule! {
        name: "neighbor dr and bdr",
        pattern: r"^DR +is +(?P<dr>\S+) +BDR +is +(?P<bdr>\S+)$",
        action: |caps, st| {
            let record = st.scope_node(Scope::Detail)?;
            record.insert("dr_ip_addr", caps.text("dr")?);
            record.insert("bdr_ip_addr", caps.text("bdr")?);
            Ok(())
        },
    }
}

/// Options is 0x42
fn rule_options() -> Rule {
    rule! {
        name: "neighbor options",
        pattern: r"^Options +is +(?P<options>\S+)$",
        action: |caps, st| {
            st.scope_node(Scope::Detail)?.insert("options", caps.text("options")?);
            Ok(())
        },
    }
}

/// LLS Options is 0x1 (LR)
fn rule_lls_options() -> Rule {
    rule! {
        name: "neighbor lls options",
        pattern: r"^LLS +Options +is +(?P<options>.*)$",
        action: |caps, st| {
            st.scope_node(Scope::Detail)?.insert("lls_options", caps.text("options")?);
            Ok(())
        },
    }
}

/// Dead timer due in 00:00:38
fn rule_dead_timer() -> Rule {
    rule! {
        name: "neighbor dead timer",
        pattern: r"^Dead +timer +due +in +(?P<due>\S+)$",
        action: |caps, st| {
            st.scope_node(Scope::Detail)?.insert("dead_timer", caps.text("due")?);
            Ok(())
        },
    }
}

/// Neighbor is up for 08:22:07
fn rule_uptime() -> Rule {
    rule! {
        name: "neighbor uptime",
        pattern: r"^Neighbor +is +up +for +(?P<uptime>\S+)$",
        action: |caps, st| {
            st.scope_node(Scope::Detail)?.insert("neighbor_uptime", caps.text("uptime")?);
            Ok(())
        },
    }
}

/// Number of DBD retrans during last exchange 0
fn rule_dbd_retrans() -> Rule {
    rule! {
        name: "dbd retransmissions",
        pattern: r"^Number +of +DBD +retrans +during +last +exchange +(?P<count>\d+)$",
        action: |caps, st| {
            st.scope_node(Scope::Detail)?.insert("dbd_retrans", caps.int("count")?);
            Ok(())
        },
    }
}

/// Index 1/1, retransmission queue length 0, number of retransmission 0
fn rule_retrans_queue() -> Rule {
    rule! {
        name: "retransmission queue",
        pattern: r"^Index +(?P<index>[^\s,]+),? +retransmission +queue +length +(?P<length>\d+), +number +of +retransmission +(?P<count>\d+)$",
        action: |caps, st| {
            let record = st.scope_node(Scope::Detail)?;
            record.insert("index", caps.text("index")?);
            record.insert("retransmission_queue_length", caps.int("length")?);
            record.insert("num_retransmission", caps.int("count")?);
            Ok(())
        },
    }
}

/// First 0(0)/0(0) Next 0(0)/0(0)
fn rule_first_next() -> Rule {
    rule! {
        name: "retransmission first and next",
        pattern: r"^First +(?P<first>\S+) +Next +(?P<next>\S+)$",
        action: |caps, st| {
            let record = st.scope_node(Scope::Detail)?;
            record.insert("first", caps.text("first")?);
            record.insert("next", caps.text("next")?);
            Ok(())
        },
    }
}

/// Last retransmission scan length is 0, maximum is 0
fn rule_scan_length() -> Rule {
    rule! {
        name: "retransmission scan length",
        pattern: r"^Last +retransmission +scan +length +is +(?P<last>\d+), +maximum +is +(?P<max>\d+)$",
        action: |caps, st| {
            let record = st.scope_node(Scope::Detail)?;
            record.insert("last_retrans_scan_length", caps.int("last")?);
            record.insert("last_retrans_max_scan_length", caps.int("max")?);
            Ok(())
        },
    }
}

/// Last retransmission scan time is 0 msec, maximum is 0 msec
fn rule_scan_time() -> Rule {
    rule! {
        name: "retransmission scan time",
        pattern: r"^Last +retransmission +scan +time +is +(?P<last>\d+) +msec, +maximum +is +(?P<max>\d+) +msec$",
        action: |caps, st| {
            let record = st.scope_node(Scope::Detail)?;
            record.insert("last_retrans_scan_time_msec", caps.int("last")?);
            record.insert("last_retrans_max_scan_time_msec", caps.int("max")?);
            Ok(())
        },
    }
}

/// LS Ack list: NSR-sync pending 0, high water mark 0
fn rule_ack_list() -> Rule {
    rule! {
        name: "neighbor ls ack list",
        pattern: r"^LS +Ack +list: +(?P<list>\S+) +pending +(?P<pending>\d+), +high +water +mark +(?P<mark>\d+)$",
        action: |caps, st| {
            let record = st.scope_node(Scope::Detail)?;
            record.insert("ls_ack_list", caps.text("list")?);
            record.insert("ls_ack_list_pending", caps.int("pending")?);
            record.insert("high_water_mark", caps.int("mark")?);
            Ok(())
        },
    }
}

/// Total neighbor count: 2
fn rule_total() -> Rule {
    rule! {
        name: "total neighbor count",
        pattern: r"^Total +neighbor +count: +(?P<count>\d+)$",
        policy: Continue,
        action: |caps, st| {
            st.scope_node(Scope::Instance)?.insert("total_neighbor_count", caps.int("count")?);
            Ok(())
        },
    }
}

pub fn get() -> Vec<Rule> {
    vec![
        rule_instance(),
        rule_neighbor(),
        rule_area(),
        rule_priority(),
        rule_dr(),
        rule_options(),
        rule_lls_options(),
        rule_dead_timer(),
        rule_uptime(),
        rule_dbd_retrans(),
        rule_retrans_queue(),
        rule_first_next(),
        rule_scan_length(),
        rule_scan_time(),
        rule_ack_list(),
        rule_total(),
    ]
}

fn neighbor_record() -> Schema {
    Schema::map()
        .req("neighbor_router_id", Schema::text())
        .req("address", Schema::text())
        .req("priority", Schema::int())
        .req("state", Schema::text())
        .req("num_state_changes", Schema::int())
        .req("dr_ip_addr", Schema::text())
        .req("bdr_ip_addr", Schema::text())
        .opt("options", Schema::text())
        .opt("lls_options", Schema::text())
        .opt("dead_timer", Schema::text())
        .opt("neighbor_uptime", Schema::text())
        .opt("dbd_retrans", Schema::int())
        .opt("index", Schema::text())
        .opt("retransmission_queue_length", Schema::int())
        .opt("num_retransmission", Schema::int())
        .opt("first", Schema::text())
        .opt("next", Schema::text())
        .opt("last_retrans_scan_length", Schema::int())
        .opt("last_retrans_max_scan_length", Schema::int())
        .opt("last_retrans_scan_time_msec", Schema::int())
        .opt("last_retrans_max_scan_time_msec", Schema::int())
        .opt("ls_ack_list", Schema::text())
        .opt("ls_ack_list_pending", Schema::int())
        .opt("high_water_mark", Schema::int())
        .into()
}

pub fn schema() -> Schema {
    let entries = Schema::any(Schema::map().req("neighbors", Schema::any(neighbor_record())));
    per_instance(
        Schema::map().req("total_neighbor_count", Schema::int()).req(
            "areas",
            Schema::any(
                Schema::map()
                    .opt("interfaces", entries.clone())
                    .opt("sham_links", entries.clone())
                    .opt("virtual_links", entries),
            ),
        ),
    )
}

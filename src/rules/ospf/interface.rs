//! `show ospf vrf all-inclusive interface`

use crate::engine::{Scope, composite_key, is_up, state_name};
use crate::rules::ospf::helpers::{SHAM_LINKS, VIRTUAL_LINKS, classify_interface, enter_area, enter_instance, per_instance};
use crate::schema::Schema;
use crate::{Rule, Value};

/// Interfaces for OSPF 1, VRF VRF1
fn rule_instance() -> Rule {
    rule! {
        name: "interfaces for instance",
        pattern: r"^Interfaces +for +OSPF +(?P<instance>\S+)(?:, +VRF +(?P<vrf>\S+))?$",
        action: |caps, st| {
            enter_instance(st, caps.opt_text("vrf"), caps.text("instance")?)
        },
    }
}

/// GigabitEthernet0/0/0/2 is up, line protocol is up
///
/// Only remembers the status; the record is created once the process line
/// supplies the router id needed for pseudo-interface keys.
fn rule_status() -> Rule {
    rule! {
        name: "interface status",
        pattern: r"^(?P<interface>\S+) +is +(?P<enable>unknown|up|down), +line +protocol +is +(?P<line_protocol>up|down)$",
        action: |caps, st| {
            let interface = caps.text("interface")?;
            let (collection, name) = classify_interface(interface);
            st.cursor.take_var("ip_address");
            st.cursor.set_var(Scope::Instance, "interface", interface);
            st.cursor.set_var(Scope::Instance, "collection", collection);
            st.cursor.set_var(Scope::Instance, "name", name);
            st.cursor.set_var(Scope::Instance, "enable", is_up(caps.text("enable")?));
            st.cursor.set_var(Scope::Instance, "line_protocol", is_up(caps.text("line_protocol")?));
            Ok(())
        },
    }
}

/// Internet Address 10.2.3.3/24, Area 0
fn rule_address() -> Rule {
    rule! {
        name: "interface address and area",
        pattern: r"^Internet +Address +(?P<address>\S+), +Area +(?P<area>\S+)$",
        action: |caps, st| {
            enter_area(st, caps.text("area")?)?;
            st.cursor.set_var(Scope::Area, "ip_address", caps.text("address")?);
            Ok(())
        },
    }
}

/// Process ID 1, VRF VRF1, Router ID 3.3.3.3, Network Type SHAM_LINK, Cost: 111
fn rule_process() -> Rule {
    rule! {
        name: "interface process and network type",
        pattern: r"^Process +ID +(?P<pid>\S+)(?:, +VRF +\S+)?, +Router +ID +(?P<router_id>\S+), +Network +Type +(?P<interface_type>\S+)(?:, +Cost: +(?P<cost>\d+))?$",
        action: |caps, st| {
            let pid = caps.text("pid")?;
            let router_id = caps.text("router_id")?;
            let collection = st.cursor.text_var("collection")?.to_string();
            let key = match collection.as_str() {
                VIRTUAL_LINKS => composite_key(st.cursor.key(Scope::Area)?, router_id),
                SHAM_LINKS => composite_key(pid, router_id),
                _ => st.cursor.text_var("interface")?.to_string(),
            };
            let known: Vec<(&str, Value)> = ["name", "ip_address", "enable", "line_protocol"]
                .into_iter()
                .filter_map(|field| st.cursor.try_var(field).map(|v| (field, v.clone())))
                .collect();

            st.cursor.set_scope(Scope::Collection, [collection]);
            st.cursor.set_scope(Scope::Entry, [key]);
            let entry = st.scope_node(Scope::Entry)?;
            entry.insert("demand_circuit", false);
            entry.child_mut("bfd")?.insert("enable", false);
            for (field, value) in known {
                entry.insert(field, value);
            }
            entry.insert("process_id", pid);
            entry.insert("router_id", router_id);
            entry.insert("interface_type", state_name(caps.text("interface_type")?));
            if let Some(cost) = caps.opt_int("cost")? {
                entry.insert("cost", cost);
            }
            Ok(())
        },
    }
}

/// Transmit Delay is 1 sec, State DR, Priority 1, MTU 1500, MaxPktSz 1500
fn rule_transmit() -> Rule {
    rule! {
        name: "transmit delay and state",
        pattern: r"^Transmit +Delay is +(?P<delay>\d+) +sec, +State +(?P<state>\S+),(?: +Priority +(?P<priority>\d+),)? +MTU +(?P<mtu>\d+), +MaxPktSz +(?P<max_pkt_sz>\d+)$",
        action: |caps, st| {
            let entry = st.scope_node(Scope::Entry)?;
            entry.insert("transmit_delay", caps.int("delay")?);
            entry.insert("state", state_name(caps.text("state")?));
            entry.insert("mtu", caps.int("mtu")?);
            entry.insert("max_pkt_sz", caps.int("max_pkt_sz")?);
            if let Some(priority) = caps.opt_int("priority")? {
                entry.insert("priority", priority);
            }
            Ok(())
        },
    }
}

/// Designated Router (ID) 3.3.3.3, Interface address 10.2.3.3
fn rule_dr() -> Rule {
    rule! {
        name: "designated router",
        pattern: r"^Designated +Router +\(ID\) +(?P<router_id>\S+), +Interface +address +(?P<address>\S+)$",
        action: |caps, st| {
            let entry = st.scope_node(Scope::Entry)?;
            entry.insert("dr_router_id", caps.text("router_id")?);
            entry.insert("dr_ip_addr", caps.text("address")?);
            Ok(())
        },
    }
}

/// Backup Designated router (ID) 2.2.2.2, Interface address 10.2.3.2
fn rule_bdr() -> Rule {
    rule! {
        name: "backup designated router",
        pattern: r"^Backup +Designated +[Rr]outer +\(ID\) +(?P<router_id>\S+), +Interface +address +(?P<address>\S+)$",
        action: |caps, st| {
            let entry = st.scope_node(Scope::Entry)?;
            entry.insert("bdr_router_id", caps.text("router_id")?);
            entry.insert("bdr_ip_addr", caps.text("address")?);
            Ok(())
        },
    }
}

/// Timer intervals configured, Hello 10, Dead 40, Wait 40, Retransmit 5
fn rule_timers() -> Rule {
    rule! {
        name: "timer intervals",
        pattern: r"^Timer +intervals +configured, +Hello +(?P<hello>\d+), +Dead +(?P<dead>\d+), +Wait +(?P<wait>\d+), +Retransmit +(?P<retransmit>\d+)$",
        action: |caps, st| {
            let entry = st.scope_node(Scope::Entry)?;
            entry.insert("hello_interval", caps.int("hello")?);
            entry.insert("dead_interval", caps.int("dead")?);
            entry.insert("wait_interval", caps.int("wait")?);
            entry.insert("retransmit_interval", caps.int("retransmit")?);
            Ok(())
        },
    }
}

/// Hello due in 00:00:07:587
fn rule_hello_due() -> Rule {
    rule! {
        name: "hello due",
        pattern: r"^Hello +due +in +(?P<due>\S+)$",
        action: |caps, st| {
            let entry = st.scope_node(Scope::Entry)?;
            entry.insert("passive", false);
            entry.insert("hello_due_in", caps.text("due")?);
            Ok(())
        },
    }
}

/// No Hellos (Passive interface)
fn rule_passive() -> Rule {
    rule! {
        name: "passive interface",
        pattern: r"^No +Hellos +\(Passive +interface\)$",
        action: |_caps, st| {
            st.scope_node(Scope::Entry)?.insert("passive", true);
            Ok(())
        },
    }
}

/// Index 2/2, flood queue length 0
fn rule_flood_queue() -> Rule {
    rule! {
        name: "flood queue",
        pattern: r"^Index +(?P<index>\S+), +flood +queue +length +(?P<length>\d+)$",
        action: |caps, st| {
            let entry = st.scope_node(Scope::Entry)?;
            entry.insert("index", caps.text("index")?);
            entry.insert("flood_queue_length", caps.int("length")?);
            Ok(())
        },
    }
}

/// Next 0(0)/0(0)
fn rule_next() -> Rule {
    rule! {
        name: "flood next",
        pattern: r"^Next +(?P<next>\S+)$",
        action: |caps, st| {
            st.scope_node(Scope::Entry)?.insert("next", caps.text("next")?);
            Ok(())
        },
    }
}

/// Last flood scan length is 1, maximum is 3
fn rule_scan_length() -> Rule {
    rule! {
        name: "flood scan length",
        pattern: r"^Last +flood +scan +length +is +(?P<last>\d+), +maximum +is +(?P<max>\d+)$",
        action: |caps, st| {
            let entry = st.scope_node(Scope::Entry)?;
            entry.insert("last_flood_scan_length", caps.int("last")?);
            entry.insert("max_flood_scan_length", caps.int("max")?);
            Ok(())
        },
    }
}

/// Last flood scan time is 0 msec, maximum is 0 msec
fn rule_scan_time() -> Rule {
    rule! {
        name: "flood scan time",
        pattern: r"^Last +flood +scan +time +is +(?P<last>\d+) +msec, +maximum +is +(?P<max>\d+) +msec$",
        action: |caps, st| {
            let entry = st.scope_node(Scope::Entry)?;
            entry.insert("last_flood_scan_time_msec", caps.int("last")?);
            entry.insert("max_flood_scan_time_msec", caps.int("max")?);
            Ok(())
        },
    }
}

/// LS Ack List: current length 0, high water mark 7
fn rule_ack_list() -> Rule {
    rule! {
        name: "ls ack list",
        pattern: r"^LS +Ack +List: +(?P<list>\S+) +length +(?P<length>\d+), +high +water +mark +(?P<mark>\d+)$",
        action: |caps, st| {
            let entry = st.scope_node(Scope::Entry)?;
            entry.insert("ls_ack_list", caps.text("list")?);
            entry.insert("ls_ack_list_length", caps.int("length")?);
            entry.insert("high_water_mark", caps.int("mark")?);
            Ok(())
        },
    }
}

/// Neighbor Count is 1, Adjacent neighbor count is 1
fn rule_neighbor_count() -> Rule {
    rule! {
        name: "neighbor count",
        pattern: r"^Neighbor +Count +is +(?P<count>\d+), +Adjacent +neighbor +count +is +(?P<adjacent>\d+)$",
        action: |caps, st| {
            let entry = st.scope_node(Scope::Entry)?;
            entry.insert("nbr_count", caps.int("count")?);
            entry.insert("adj_nbr_count", caps.int("adjacent")?);
            Ok(())
        },
    }
}

/// Adjacent with neighbor 2.2.2.2  (Backup Designated Router)
fn rule_adjacent() -> Rule {
    rule! {
        name: "adjacent neighbor",
        pattern: r"^Adjacent +with +neighbor +(?P<neighbor>\S+) +\(.*\)$",
        action: |caps, st| {
            st.scope_node(Scope::Entry)?.insert("adj_nbr", caps.text("neighbor")?);
            Ok(())
        },
    }
}

/// Suppress hello for 0 neighbor(s)
fn rule_suppress_hello() -> Rule {
    rule! {
        name: "suppress hello",
        pattern: r"^Suppress +hello +for +(?P<count>\d+) +neighbor\(s\)$",
        action: |caps, st| {
            st.scope_node(Scope::Entry)?.insert("num_nbrs_suppress_hello", caps.int("count")?);
            Ok(())
        },
    }
}

/// Multi-area interface Count is 0
fn rule_multi_area() -> Rule {
    rule! {
        name: "multi-area interface count",
        pattern: r"^Multi-area +interface +Count +is +(?P<count>\d+)$",
        action: |caps, st| {
            st.scope_node(Scope::Entry)?.insert("multi_area_intf_count", caps.int("count")?);
            Ok(())
        },
    }
}

/// Configured as demand circuit.
fn rule_demand_configured() -> Rule {
    rule! {
        name: "configured as demand circuit",
        pattern: r"^Configured +as +demand +circuit\.$",
        action: |_caps, st| {
            st.scope_node(Scope::Entry)?.insert("demand_circuit", true);
            Ok(())
        },
    }
}

/// Run as demand circuit.
fn rule_demand_run() -> Rule {
    rule! {
        name: "run as demand circuit",
        pattern: r"^Run +as +demand +circuit\.$",
        policy: Continue,
        action: |_caps, st| {
            st.scope_node(Scope::Entry)?.insert("demand_circuit", true);
            Ok(())
        },
    }
}

/// DoNotAge LSA not allowed (Number of DCbitless LSA is 1).
fn rule_do_not_age() -> Rule {
    rule! {
        name: "donotage not allowed",
        pattern: r"^DoNotAge +LSA +not +allowed +\(.*\)\.$",
        policy: Continue,
        action: |_caps, st| {
            st.scope_node(Scope::Entry)?.insert("demand_circuit", true);
            Ok(())
        },
    }
}

/// BFD enabled, BFD interval 12345 msec, BFD multiplier 50, Mode: Default
fn rule_bfd() -> Rule {
    rule! {
        name: "bfd enabled",
        pattern: r"^BFD +enabled(?:, +BFD +interval +(?P<interval>\d+) +msec)?(?:, +BFD +multiplier +(?P<multiplier>\d+))?(?:, +Mode: +(?P<mode>\S+))?$",
        action: |caps, st| {
            let bfd = st.scope_node(Scope::Entry)?.child_mut("bfd")?;
            bfd.insert("enable", true);
            if let Some(interval) = caps.opt_int("interval")? {
                bfd.insert("interval", interval);
            }
            if let Some(multiplier) = caps.opt_int("multiplier")? {
                bfd.insert("multiplier", multiplier);
            }
            if let Some(mode) = caps.opt_text("mode") {
                bfd.insert("mode", mode);
            }
            Ok(())
        },
    }
}

pub fn get() -> Vec<Rule> {
    vec![
        rule_instance(),
        rule_status(),
        rule_address(),
        rule_process(),
        rule_transmit(),
        rule_dr(),
        rule_bdr(),
        rule_timers(),
        rule_hello_due(),
        rule_passive(),
        rule_flood_queue(),
        rule_next(),
        rule_scan_length(),
        rule_scan_time(),
        rule_ack_list(),
        rule_neighbor_count(),
        rule_adjacent(),
        rule_suppress_hello(),
        rule_multi_area(),
        rule_demand_configured(),
        rule_demand_run(),
        rule_do_not_age(),
        rule_bfd(),
    ]
}

/// Shape shared by interfaces, sham links and virtual links.
fn interface_entry() -> Schema {
    Schema::map()
        .req("name", Schema::text())
        .req("enable", Schema::boolean())
        .req("line_protocol", Schema::boolean())
        .req("ip_address", Schema::text())
        .req("demand_circuit", Schema::boolean())
        .req("process_id", Schema::text())
        .req("router_id", Schema::text())
        .req("interface_type", Schema::text())
        .req(
            "bfd",
            Schema::map()
                .req("enable", Schema::boolean())
                .opt("interval", Schema::int())
                .opt("min_interval", Schema::int())
                .opt("multiplier", Schema::int())
                .opt("mode", Schema::text()),
        )
        .opt("cost", Schema::int())
        .opt("transmit_delay", Schema::int())
        .opt("state", Schema::text())
        .opt("priority", Schema::int())
        .opt("mtu", Schema::int())
        .opt("max_pkt_sz", Schema::int())
        .opt("dr_router_id", Schema::text())
        .opt("dr_ip_addr", Schema::text())
        .opt("bdr_router_id", Schema::text())
        .opt("bdr_ip_addr", Schema::text())
        .opt("hello_interval", Schema::int())
        .opt("dead_interval", Schema::int())
        .opt("wait_interval", Schema::int())
        .opt("retransmit_interval", Schema::int())
        .opt("passive", Schema::boolean())
        .opt("hello_due_in", Schema::text())
        .opt("index", Schema::text())
        .opt("flood_queue_length", Schema::int())
        .opt("next", Schema::text())
        .opt("last_flood_scan_length", Schema::int())
        .opt("max_flood_scan_length", Schema::int())
        .opt("last_flood_scan_time_msec", Schema::int())
        .opt("max_flood_scan_time_msec", Schema::int())
        .opt("ls_ack_list", Schema::text())
        .opt("ls_ack_list_length", Schema::int())
        .opt("high_water_mark", Schema::int())
        .opt("nbr_count", Schema::int())
        .opt("adj_nbr_count", Schema::int())
        .opt("adj_nbr", Schema::text())
        .opt("num_nbrs_suppress_hello", Schema::int())
        .opt("multi_area_intf_count", Schema::int())
        .into()
}

pub fn schema() -> Schema {
    let entries = Schema::any(interface_entry());
    per_instance(Schema::map().req(
        "areas",
        Schema::any(
            Schema::map()
                .opt("interfaces", entries.clone())
                .opt("virtual_links", entries.clone())
                .opt("sham_links", entries),
        ),
    ))
}

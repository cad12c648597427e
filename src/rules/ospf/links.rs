//! `show ospf vrf all-inclusive sham-links` and `... virtual-links`
//!
//! Both commands print the same block layout and share one rule table,
//! parameterized by [`LinkKind`]. They differ in how a link is keyed:
//!
//! ```text
//! sham link     Area 1, source address 33.33.33.33       -> "33.33.33.33 22.22.22.22"
//!               (local id, remote id)
//! virtual link  Transit area 1, via interface Gi0/0/0/3  -> "0.0.0.1 4.4.4.4"
//!               (transit area, router id)
//! ```

use crate::Rule;
use crate::engine::{Scope, composite_key, state_name};
use crate::rules::ospf::helpers::{SHAM_LINKS, VIRTUAL_LINKS, enter_area, enter_instance, per_instance};
use crate::schema::Schema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Sham,
    Virtual,
}

impl LinkKind {
    fn collection(self) -> &'static str {
        match self {
            LinkKind::Sham => SHAM_LINKS,
            LinkKind::Virtual => VIRTUAL_LINKS,
        }
    }
}

/// Sham Links for OSPF 1, VRF VRF1
fn rule_instance() -> Rule {
    rule! {
        name: "links for instance",
        pattern: r"^(?:Virtual|Sham) +Links +for +(?:OSPF +)?(?P<instance>[a-zA-Z0-9]+)(?:, +VRF +(?P<vrf>\S+))?$",
        action: |caps, st| {
            enter_instance(st, caps.opt_text("vrf"), caps.text("instance")?)
        },
    }
}

/// Sham Link OSPF_SL0 to address 22.22.22.22 is up
/// Virtual Link OSPF_VL0 to router 4.4.4.4 is up
fn rule_link() -> Rule {
    rule! {
        name: "link header",
        pattern: r"^(?:Virtual|Sham) +Link +(?P<link>\S+) +to +(?:address|router) +(?P<remote>\S+) +is +(?:up|down)$",
        action: |caps, st| {
            let link = caps.text("link")?;
            let name = crate::regex!(r"^\S+_(?P<name>[SV]L\d+)$")
                .captures(link)
                .and_then(|n| n.name("name"))
                .map_or(link, |m| m.as_str());
            st.cursor.set_var(Scope::Area, "link_name", name);
            st.cursor.set_var(Scope::Area, "remote", caps.text("remote")?);
            Ok(())
        },
    }
}

/// Area 1, source address 33.33.33.33
fn rule_sham_area() -> Rule {
    rule! {
        name: "sham link area",
        pattern: r"^Area +(?P<area>\S+), +source +address +(?P<source>\S+)$",
        action: |caps, st| {
            let remote = st.cursor.text_var("remote")?.to_string();
            let name = st.cursor.try_var("link_name").cloned();
            let source = caps.text("source")?;

            let area = enter_area(st, caps.text("area")?)?;
            st.cursor.set_scope(Scope::Collection, [SHAM_LINKS]);
            st.cursor.set_scope(Scope::Entry, [composite_key(source, &remote)]);
            let link = st.scope_node(Scope::Entry)?;
            link.insert("transit_area_id", area);
            link.insert("local_id", source);
            link.insert("demand_circuit", false);
            if let Some(name) = name {
                link.insert("name", name);
            }
            link.insert("remote_id", remote);
            Ok(())
        },
    }
}

/// Transit area 1, via interface GigabitEthernet0/0/0/3, Cost of using 65535
///
/// Picks up the DCbitless count and demand-circuit flag printed above it.
fn rule_transit_area() -> Rule {
    rule! {
        name: "virtual link transit area",
        pattern: r"^Transit +area +(?P<area>\S+), +via +interface +\S+, +Cost +of +using +(?P<cost>\d+)$",
        action: |caps, st| {
            let router_id = st.cursor.text_var("remote")?.to_string();
            let name = st.cursor.try_var("link_name").cloned();
            let dcbitless = st.cursor.try_var("dcbitless_lsa_count").cloned();
            let demand = st.cursor.try_var("demand_circuit").cloned();

            let area = enter_area(st, caps.text("area")?)?;
            st.cursor.set_scope(Scope::Collection, [VIRTUAL_LINKS]);
            st.cursor.set_scope(Scope::Entry, [composite_key(&area, &router_id)]);
            let link = st.scope_node(Scope::Entry)?;
            link.insert("transit_area_id", area);
            link.insert("demand_circuit", false);
            link.insert("cost", caps.int("cost")?);
            if let Some(name) = name {
                link.insert("name", name);
            }
            link.insert("router_id", router_id);
            if let Some(count) = dcbitless {
                link.insert("dcbitless_lsa_count", count);
            }
            if let Some(demand) = demand {
                link.insert("demand_circuit", demand);
            }
            Ok(())
        },
    }
}

/// IfIndex = 2
fn rule_if_index() -> Rule {
    rule! {
        name: "link ifindex",
        pattern: r"^IfIndex += +(?P<index>\d+)$",
        action: |caps, st| {
            st.scope_node(Scope::Entry)?.insert("if_index", caps.int("index")?);
            Ok(())
        },
    }
}

/// Run as demand circuit
fn rule_demand() -> Rule {
    rule! {
        name: "link run as demand circuit",
        pattern: r"^Run +as +demand +circuit$",
        action: |_caps, st| {
            st.scope_node(Scope::Entry)?.insert("demand_circuit", true);
            Ok(())
        },
    }
}

/// DoNotAge LSA not allowed (Number of DCbitless LSA is 1)., Cost of using 111
/// DoNotAge LSA not allowed Run as demand circuit (Number of DCbitless LSA is 1).
///
/// Sham links print this after their area line and take the values directly.
/// Virtual links print it before the transit area line, so the values wait in
/// the cursor until the link record exists.
fn rule_do_not_age(kind: LinkKind) -> Rule {
    rule! {
        name: "link dcbitless count",
        pattern: r"^DoNotAge +LSA +not +allowed(?: +(?P<demand>Run +as +demand +circuit))? +\(Number +of +DCbitless +LSA +is +(?P<dcbitless>\d+)\)\.,?(?: +Cost +of +using +(?P<cost>\d+))?$",
        action: |caps, st| {
            let dcbitless = caps.int("dcbitless")?;
            let demand = caps.opt_text("demand").is_some();
            match kind {
                LinkKind::Virtual => {
                    st.cursor.set_var(Scope::Area, "dcbitless_lsa_count", dcbitless);
                    if demand {
                        st.cursor.set_var(Scope::Area, "demand_circuit", true);
                    }
                }
                LinkKind::Sham => {
                    let link = st.scope_node(Scope::Entry)?;
                    link.insert("dcbitless_lsa_count", dcbitless);
                    if demand {
                        link.insert("demand_circuit", true);
                    }
                    if let Some(cost) = caps.opt_int("cost")? {
                        link.insert("cost", cost);
                    }
                }
            }
            Ok(())
        },
    }
}

/// Transmit Delay is 7 sec, State POINT_TO_POINT,
fn rule_transmit() -> Rule {
    rule! {
        name: "link transmit delay and state",
        pattern: r"^Transmit +Delay +is +(?P<delay>\d+) +sec, +State +(?P<state>[^\s,]+),?$",
        action: |caps, st| {
            let link = st.scope_node(Scope::Entry)?;
            link.insert("transmit_delay", caps.int("delay")?);
            link.insert("state", state_name(caps.text("state")?));
            Ok(())
        },
    }
}

/// Timer intervals configured, Hello 3, Dead 13, Wait 13, Retransmit 5
fn rule_timers() -> Rule {
    rule! {
        name: "link timer intervals",
        pattern: r"^Timer +intervals +configured, +Hello +(?P<hello>\d+), +Dead +(?P<dead>\d+), +Wait +(?P<wait>\d+), +Retransmit +(?P<retransmit>\d+)$",
        action: |caps, st| {
            let link = st.scope_node(Scope::Entry)?;
            link.insert("hello_interval", caps.int("hello")?);
            link.insert("dead_interval", caps.int("dead")?);
            link.insert("wait_interval", caps.int("wait")?);
            link.insert("retransmit_interval", caps.int("retransmit")?);
            Ok(())
        },
    }
}

/// Hello due in 00:00:00:772
fn rule_hello_timer() -> Rule {
    rule! {
        name: "link hello timer",
        pattern: r"^Hello +due +in +(?P<due>\S+)$",
        action: |caps, st| {
            st.scope_node(Scope::Entry)?.insert("hello_timer", caps.text("due")?);
            Ok(())
        },
    }
}

/// Non-Stop Forwarding (NSF) enabled, last NSF restart 00:18:16 ago
fn rule_nsf() -> Rule {
    rule! {
        name: "link nsf",
        pattern: r"^Non-Stop +Forwarding +\(NSF\) +enabled, +last +NSF +restart +(?P<restart>\S+) +ago$",
        action: |caps, st| {
            let nsf = st.scope_node(Scope::Entry)?.child_mut("nsf")?;
            nsf.insert("enable", true);
            nsf.insert("last_restart", caps.text("restart")?);
            Ok(())
        },
    }
}

/// Clear text authentication enabled
fn rule_authentication() -> Rule {
    rule! {
        name: "link authentication",
        pattern: r"^(?P<auth>[a-zA-Z\s]+) +authentication +enabled$",
        action: |caps, st| {
            let algorithm = caps.text("auth")?.to_lowercase();
            st.scope_node(Scope::Entry)?
                .child_mut("authentication")?
                .child_mut("auth_trailer_key")?
                .insert("crypto_algorithm", algorithm);
            Ok(())
        },
    }
}

pub fn get(kind: LinkKind) -> Vec<Rule> {
    let area = match kind {
        LinkKind::Sham => rule_sham_area(),
        LinkKind::Virtual => rule_transit_area(),
    };
    vec![
        rule_instance(),
        rule_link(),
        area,
        rule_if_index(),
        rule_demand(),
        rule_do_not_age(kind),
        rule_transmit(),
        rule_timers(),
        rule_hello_timer(),
        rule_nsf(),
        rule_authentication(),
    ]
}

pub fn schema(kind: LinkKind) -> Schema {
    let common = Schema::map()
        .req("name", Schema::text())
        .req("transit_area_id", Schema::text())
        .req("hello_interval", Schema::int())
        .req("dead_interval", Schema::int())
        .req("wait_interval", Schema::int())
        .req("retransmit_interval", Schema::int())
        .req("transmit_delay", Schema::int())
        .req("cost", Schema::int())
        .req("state", Schema::text())
        .req("hello_timer", Schema::text())
        .req("demand_circuit", Schema::boolean())
        .req("dcbitless_lsa_count", Schema::int())
        .opt("nsf", Schema::map().req("enable", Schema::boolean()).req("last_restart", Schema::text()))
        .opt(
            "authentication",
            Schema::map().req("auth_trailer_key", Schema::map().req("crypto_algorithm", Schema::text())),
        );
    let link = match kind {
        LinkKind::Sham => common
            .req("local_id", Schema::text())
            .req("remote_id", Schema::text())
            .req("if_index", Schema::int()),
        LinkKind::Virtual => common.req("router_id", Schema::text()).opt("if_index", Schema::int()),
    };
    per_instance(
        Schema::map().req("areas", Schema::any(Schema::map().req(kind.collection(), Schema::any(link)))),
    )
}

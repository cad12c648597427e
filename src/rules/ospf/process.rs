//! `show ospf vrf all-inclusive`
//!
//! Routing-process summary: identity, stub-router conditions, SPF and LSA
//! throttling, global counters, then one block of statistics per area.

use crate::Rule;
use crate::engine::{ParseState, Scope};
use crate::error::RuleFault;
use crate::rules::ospf::helpers::{enter_area, enter_instance, per_instance};
use crate::schema::Schema;
use crate::tree::Node;

fn instance_node(st: &mut ParseState) -> Result<&mut Node, RuleFault> {
    st.scope_node(Scope::Instance)
}

fn throttle<'a>(st: &'a mut ParseState, kind: &str) -> Result<&'a mut Node, RuleFault> {
    instance_node(st)?.child_mut("spf_control")?.child_mut("throttle")?.child_mut(kind)
}

fn numbers(st: &mut ParseState) -> Result<&mut Node, RuleFault> {
    instance_node(st)?.child_mut("numbers")
}

fn area_statistics(st: &mut ParseState) -> Result<&mut Node, RuleFault> {
    st.scope_node(Scope::Area)?.child_mut("statistics")
}

/// Record for the stub-router condition announced by the last `Condition:` line.
fn stub_condition(st: &mut ParseState) -> Result<&mut Node, RuleFault> {
    let condition = st.cursor.text_var("stub_condition")?.to_string();
    instance_node(st)?.child_mut("stub_router")?.child_mut(&condition)
}

/// Routing Process "ospf 1" with ID 3.3.3.3
/// VRF VRF1 in Routing Process "ospf 1" with ID 3.3.3.3
fn rule_process() -> Rule {
    rule! {
        name: "routing process",
        pattern: r#"^(?:VRF +(?P<vrf>\S+) +in +)?Routing +Process +"(?P<instance>[a-zA-Z0-9\s]+)" +with +ID +(?P<router_id>\S+)$"#,
        action: |caps, st| {
            enter_instance(st, caps.opt_text("vrf"), caps.text("instance")?)?;
            instance_node(st)?.insert("router_id", caps.text("router_id")?);
            Ok(())
        },
    }
}

/// Role: Primary Active
fn rule_role() -> Rule {
    rule! {
        name: "process role",
        pattern: r"^Role *: +(?P<role>[a-zA-Z0-9\s]+)$",
        action: |caps, st| {
            instance_node(st)?.insert("role", caps.text("role")?.to_lowercase());
            Ok(())
        },
    }
}

/// NSR (Non-stop routing) is Enabled
fn rule_nsr() -> Rule {
    rule! {
        name: "non-stop routing",
        pattern: r"^NSR +\(Non-stop +routing\) +is +(?P<nsr>\S+)$",
        action: |caps, st| {
            let enabled = caps.text("nsr")?.eq_ignore_ascii_case("enabled");
            instance_node(st)?.child_mut("nsr")?.insert("enable", enabled);
            Ok(())
        },
    }
}

/// Supports only single TOS(TOS0) routes
/// Supports opaque LSA
/// It is an area border and autonomous system boundary router
///
/// Recognized so they show up as handled in traces; they carry no field.
fn rule_capabilities() -> Rule {
    rule! {
        name: "capability banner",
        pattern: r"^(?:Supports +only +single +TOS\(TOS0\) +routes|Supports +opaque +LSA|It +is +an +area +border +and +autonomous +system +boundary +router)$",
        action: |_caps, _st| { Ok(()) },
    }
}

/// Router is not originating router-LSAs with maximum metric
fn rule_not_originating() -> Rule {
    rule! {
        name: "stub router inactive",
        pattern: r"^Router +is +not +originating +router-LSAs +with +maximum +metric$",
        action: |_caps, st| {
            let always = instance_node(st)?.child_mut("stub_router")?.child_mut("always")?;
            for field in ["always", "include_stub", "summary_lsa", "external_lsa"] {
                always.insert(field, false);
            }
            Ok(())
        },
    }
}

/// Originating router-LSAs with maximum metric
fn rule_originating() -> Rule {
    rule! {
        name: "stub router active",
        pattern: r"^Originating +router-LSAs +with +maximum +metric$",
        action: |_caps, st| {
            instance_node(st)?.child_mut("stub_router")?;
            Ok(())
        },
    }
}

/// Condition: always State: active
/// Condition: on switch-over for 10 seconds, State: inactive
///
/// `start-up` and `switch-over` become `on_startup` and `on_switchover`. The
/// advertise flags default to false until an `Advertise ...` line sets them.
fn rule_condition() -> Rule {
    rule! {
        name: "stub router condition",
        pattern: r"^Condition:(?: +on)? +(?P<condition>[a-zA-Z\-]+)(?: +for +(?P<seconds>\d+) +seconds,)? +State: +(?P<state>\S+)$",
        action: |caps, st| {
            let mut condition = caps.text("condition")?.to_lowercase();
            if condition != "always" {
                condition = format!("on_{}", condition.replace('-', ""));
            }
            let record = instance_node(st)?.child_mut("stub_router")?.child_mut(&condition)?;
            record.insert(condition.as_str(), true);
            for flag in ["include_stub", "summary_lsa", "external_lsa"] {
                record.insert_absent(flag, false);
            }
            if let Some(seconds) = caps.opt_int("seconds")? {
                record.insert("duration", seconds);
            }
            record.insert("state", caps.text("state")?.to_lowercase());
            st.cursor.set_var(Scope::Instance, "stub_condition", condition);
            Ok(())
        },
    }
}

/// Advertise stub links with maximum metric in router-LSAs
fn rule_advertise_stub() -> Rule {
    rule! {
        name: "advertise stub links",
        pattern: r"^Advertise +stub +links +with +maximum +metric +in +router-LSAs$",
        action: |_caps, st| {
            stub_condition(st)?.insert("include_stub", true);
            Ok(())
        },
    }
}

/// Advertise summary-LSAs with metric 16711680
fn rule_advertise_summary() -> Rule {
    rule! {
        name: "advertise summary lsas",
        pattern: r"^Advertise +summary-LSAs +with +metric +\d+$",
        action: |_caps, st| {
            stub_condition(st)?.insert("summary_lsa", true);
            Ok(())
        },
    }
}

/// Advertise external-LSAs with metric 16711680
fn rule_advertise_external() -> Rule {
    rule! {
        name: "advertise external lsas",
        pattern: r"^Advertise +external-LSAs +with +metric +\d+$",
        action: |_caps, st| {
            stub_condition(st)?.insert("external_lsa", true);
            Ok(())
        },
    }
}

/// Initial SPF schedule delay 50 msecs
fn rule_spf_start() -> Rule {
    rule! {
        name: "spf initial delay",
        pattern: r"^Initial +SPF +schedule +delay +(?P<time>\S+) +msecs$",
        action: |caps, st| {
            throttle(st, "spf")?.insert("start", caps.truncated("time")?);
            Ok(())
        },
    }
}

/// Minimum hold time between two consecutive SPFs 200 msecs
fn rule_spf_hold() -> Rule {
    rule! {
        name: "spf hold time",
        pattern: r"^Minimum +hold +time +between +two +consecutive +SPFs +(?P<time>\S+) +msecs$",
        action: |caps, st| {
            throttle(st, "spf")?.insert("hold", caps.truncated("time")?);
            Ok(())
        },
    }
}

/// Maximum wait time between two consecutive SPFs 5000 msecs
fn rule_spf_maximum() -> Rule {
    rule! {
        name: "spf maximum wait",
        pattern: r"^Maximum +wait +time +between +two +consecutive +SPFs +(?P<time>\S+) +msecs$",
        action: |caps, st| {
            throttle(st, "spf")?.insert("maximum", caps.truncated("time")?);
            Ok(())
        },
    }
}

/// Initial LSA throttle delay 50 msecs
fn rule_lsa_start() -> Rule {
    rule! {
        name: "lsa initial delay",
        pattern: r"^Initial +LSA +throttle +delay +(?P<time>\S+) +msecs$",
        action: |caps, st| {
            throttle(st, "lsa")?.insert("start", caps.truncated("time")?);
            Ok(())
        },
    }
}

/// Minimum hold time for LSA throttle 200 msecs
fn rule_lsa_hold() -> Rule {
    rule! {
        name: "lsa hold time",
        pattern: r"^Minimum +hold +time +for +LSA +throttle +(?P<time>\S+) +msecs$",
        action: |caps, st| {
            throttle(st, "lsa")?.insert("hold", caps.truncated("time")?);
            Ok(())
        },
    }
}

/// Maximum wait time for LSA throttle 5000 msecs
fn rule_lsa_maximum() -> Rule {
    rule! {
        name: "lsa maximum wait",
        pattern: r"^Maximum +wait +time +for +LSA +throttle +(?P<time>\S+) +msecs$",
        action: |caps, st| {
            throttle(st, "lsa")?.insert("maximum", caps.truncated("time")?);
            Ok(())
        },
    }
}

/// Minimum LSA interval 200 msecs. Minimum LSA arrival 100 msecs
fn rule_lsa_interval() -> Rule {
    rule! {
        name: "lsa interval and arrival",
        pattern: r"^Minimum +LSA +interval +(?P<interval>\S+) +msecs\. +Minimum +LSA +arrival +(?P<arrival>\S+) +msecs$",
        action: |caps, st| {
            let lsa = throttle(st, "lsa")?;
            lsa.insert("interval", caps.truncated("interval")?);
            lsa.insert("arrival", caps.truncated("arrival")?);
            Ok(())
        },
    }
}

/// LSA refresh interval 1800 seconds
fn rule_lsa_refresh() -> Rule {
    rule! {
        name: "lsa refresh interval",
        pattern: r"^LSA +refresh +interval +(?P<refresh>\S+) +seconds$",
        action: |caps, st| {
            throttle(st, "lsa")?.insert("refresh_interval", caps.truncated("refresh")?);
            Ok(())
        },
    }
}

/// Flood pacing interval 33 msecs. Retransmission pacing interval 66 msecs
fn rule_pacing() -> Rule {
    rule! {
        name: "flood pacing",
        pattern: r"^Flood +pacing +interval +(?P<flood>\d+) +msecs\. +Retransmission +pacing +interval +(?P<retransmission>\d+) +msecs$",
        action: |caps, st| {
            let instance = instance_node(st)?;
            instance.insert("flood_pacing_interval", caps.int("flood")?);
            instance.insert("retransmission_interval", caps.int("retransmission")?);
            Ok(())
        },
    }
}

/// Adjacency stagger enabled; initial (per area): 2, maximum: 64
fn rule_adjacency_stagger() -> Rule {
    rule! {
        name: "adjacency stagger",
        pattern: r"^Adjacency +stagger +(?P<state>\S+); +initial +\(per +area\): +(?P<initial>\d+), +maximum: +(?P<maximum>\d+)$",
        action: |caps, st| {
            let disabled = !caps.text("state")?.contains("enable");
            let stagger = instance_node(st)?.child_mut("adjacency_stagger")?;
            stagger.insert("disable", disabled);
            stagger.insert("initial_number", caps.int("initial")?);
            stagger.insert("maximum_number", caps.int("maximum")?);
            Ok(())
        },
    }
}

/// Number of neighbors forming: 0, 2 full
fn rule_neighbors_forming() -> Rule {
    rule! {
        name: "neighbors forming",
        pattern: r"^Number +of +neighbors +forming: +(?P<forming>\d+), +(?P<full>\d+) +full$",
        action: |caps, st| {
            let numbers = numbers(st)?;
            numbers.insert("nbrs_forming", caps.int("forming")?);
            numbers.insert("nbrs_full", caps.int("full")?);
            Ok(())
        },
    }
}

/// Maximum number of configured interfaces 1024
fn rule_configured_interfaces() -> Rule {
    rule! {
        name: "configured interfaces",
        pattern: r"^Maximum +number +of +configured +interfaces +(?P<count>\d+)$",
        action: |caps, st| {
            numbers(st)?.insert("configured_interfaces", caps.int("count")?);
            Ok(())
        },
    }
}

/// Number of external LSA 1. Checksum Sum 0x00607f
fn rule_external_lsa() -> Rule {
    rule! {
        name: "external lsa count",
        pattern: r"^Number +of +external +LSA +(?P<count>\d+)\. +Checksum +Sum +(?P<checksum>\S+)$",
        action: |caps, st| {
            let numbers = numbers(st)?;
            numbers.insert("external_lsa", caps.int("count")?);
            numbers.insert("external_lsa_checksum", caps.text("checksum")?);
            Ok(())
        },
    }
}

/// Number of opaque AS LSA 0. Checksum Sum 00000000
fn rule_opaque_as_lsa() -> Rule {
    rule! {
        name: "opaque as lsa count",
        pattern: r"^Number +of +opaque +AS +LSA +(?P<count>\d+)\. +Checksum +Sum +(?P<checksum>\S+)$",
        action: |caps, st| {
            let numbers = numbers(st)?;
            numbers.insert("opaque_as_lsa", caps.int("count")?);
            numbers.insert("opaque_as_lsa_checksum", caps.text("checksum")?);
            Ok(())
        },
    }
}

/// Number of DCbitless external and opaque AS LSA 0
fn rule_dc_bitless() -> Rule {
    rule! {
        name: "dcbitless as lsa count",
        pattern: r"^Number +of +DCbitless +external +and +opaque +AS +LSA +(?P<count>\d+)$",
        action: |caps, st| {
            numbers(st)?.insert("dc_bitless", caps.int("count")?);
            Ok(())
        },
    }
}

/// Number of DoNotAge external and opaque AS LSA 0
fn rule_do_not_age() -> Rule {
    rule! {
        name: "donotage as lsa count",
        pattern: r"^Number +of +DoNotAge +external +and +opaque +AS +LSA +(?P<count>\d+)$",
        action: |caps, st| {
            numbers(st)?.insert("do_not_age", caps.int("count")?);
            Ok(())
        },
    }
}

/// Number of areas in this router is 1. 1 normal 0 stub 0 nssa
///
/// The area type is remembered and stamped onto each following area record.
fn rule_area_counts() -> Rule {
    rule! {
        name: "area type counts",
        pattern: r"^Number +of +areas +in +this +router +is +\d+\. +(?P<normal>\d+) +normal +(?P<stub>\d+) +stub +(?P<nssa>\d+) +nssa$",
        action: |caps, st| {
            let area_type = if caps.int("normal")? == 1 {
                Some("normal")
            } else if caps.int("stub")? == 1 {
                Some("stub")
            } else if caps.int("nssa")? == 1 {
                Some("nssa")
            } else {
                None
            };
            if let Some(area_type) = area_type {
                st.cursor.set_var(Scope::Instance, "area_type", area_type);
            }
            Ok(())
        },
    }
}

/// External flood list length 0
fn rule_external_flood_list() -> Rule {
    rule! {
        name: "external flood list length",
        pattern: r"^External +flood +list +length +(?P<length>\d+)$",
        action: |caps, st| {
            instance_node(st)?.insert("external_flood_list_length", caps.int("length")?);
            Ok(())
        },
    }
}

/// SNMP trap is enabled
fn rule_snmp_trap() -> Rule {
    rule! {
        name: "snmp trap",
        pattern: r"^SNMP +trap +is +(?P<state>\S+)$",
        action: |caps, st| {
            let enabled = caps.text("state")?.contains("enabled");
            instance_node(st)?.insert("snmp_trap", enabled);
            Ok(())
        },
    }
}

/// LSD connected, registered, bound, revision 1
fn rule_lsd() -> Rule {
    rule! {
        name: "label switching database",
        pattern: r"^LSD +(?P<state>[a-zA-Z,\s]+), +revision +(?P<revision>\d+)$",
        action: |caps, st| {
            let instance = instance_node(st)?;
            instance.insert("lsd_state", caps.text("state")?);
            instance.insert("lsd_revision", caps.int("revision")?);
            Ok(())
        },
    }
}

/// Segment Routing Global Block default (16000-23999), not allocated
fn rule_srgb() -> Rule {
    rule! {
        name: "segment routing global block",
        pattern: r"^Segment +Routing +Global +Block +default +\((?P<block>[0-9\-]+)\), +not +allocated$",
        action: |caps, st| {
            instance_node(st)?.insert("segment_routing_global_block_default", caps.text("block")?);
            Ok(())
        },
    }
}

/// Strict-SPF capability is enabled
fn rule_strict_spf() -> Rule {
    rule! {
        name: "strict spf capability",
        pattern: r"^Strict-SPF +capability +is +(?P<state>\S+)$",
        action: |caps, st| {
            let enabled = caps.text("state")?.contains("enabled");
            instance_node(st)?.insert("strict_spf_capability", enabled);
            Ok(())
        },
    }
}

/// Area BACKBONE(0)
/// Area 1
fn rule_area() -> Rule {
    rule! {
        name: "area",
        pattern: r"^Area +(?P<area>\S+)$",
        action: |caps, st| {
            let area_type = st.cursor.try_var("area_type").cloned();
            enter_area(st, caps.text("area")?)?;
            if let Some(area_type) = area_type {
                st.scope_node(Scope::Area)?.insert("area_type", area_type);
            }
            Ok(())
        },
    }
}

/// Number of interfaces in this area is 3
fn rule_area_interfaces() -> Rule {
    rule! {
        name: "area interface count",
        pattern: r"^Number +of +interfaces +in +this +area +is +(?P<count>\d+)$",
        action: |caps, st| {
            area_statistics(st)?.insert("interfaces_count", caps.int("count")?);
            Ok(())
        },
    }
}

/// Area has RRR enabled, topology version 15
fn rule_area_rrr() -> Rule {
    rule! {
        name: "area rrr",
        pattern: r"^Area +has +RRR +enabled, +topology +version +(?P<version>\d+)$",
        action: |caps, st| {
            let area = st.scope_node(Scope::Area)?;
            area.insert("rrr_enabled", true);
            area.insert("topology_version", caps.int("version")?);
            Ok(())
        },
    }
}

/// SPF algorithm executed 26 times
fn rule_area_spf_runs() -> Rule {
    rule! {
        name: "area spf runs",
        pattern: r"^SPF +algorithm +executed +(?P<count>\d+) +times$",
        action: |caps, st| {
            area_statistics(st)?.insert("spf_runs_count", caps.int("count")?);
            Ok(())
        },
    }
}

/// Number of LSA 19.  Checksum Sum 0x0a2fb5
fn rule_area_lsa() -> Rule {
    rule! {
        name: "area lsa count",
        pattern: r"^Number +of +LSA +(?P<count>\d+)\. +Checksum +Sum +(?P<checksum>\S+)$",
        action: |caps, st| {
            let stats = area_statistics(st)?;
            stats.insert("area_scope_lsa_count", caps.int("count")?);
            stats.insert("area_scope_lsa_cksum_sum", caps.text("checksum")?);
            Ok(())
        },
    }
}

/// Number of opaque link LSA 0.  Checksum Sum 00000000
fn rule_area_opaque_lsa() -> Rule {
    rule! {
        name: "area opaque lsa count",
        pattern: r"^Number +of +opaque +link +LSA +(?P<count>\d+)\. +Checksum +Sum +(?P<checksum>\S+)$",
        action: |caps, st| {
            let stats = area_statistics(st)?;
            stats.insert("area_scope_opaque_lsa_count", caps.int("count")?);
            stats.insert("area_scope_opaque_lsa_cksum_sum", caps.text("checksum")?);
            Ok(())
        },
    }
}

/// Number of DCbitless LSA 5
fn rule_area_dcbitless() -> Rule {
    rule! {
        name: "area dcbitless lsa count",
        pattern: r"^Number +of +DCbitless +LSA +(?P<count>\d+)$",
        action: |caps, st| {
            area_statistics(st)?.insert("dcbitless_lsa_count", caps.int("count")?);
            Ok(())
        },
    }
}

/// Number of indication LSA 0
fn rule_area_indication() -> Rule {
    rule! {
        name: "area indication lsa count",
        pattern: r"^Number +of +indication +LSA +(?P<count>\d+)$",
        action: |caps, st| {
            area_statistics(st)?.insert("indication_lsa_count", caps.int("count")?);
            Ok(())
        },
    }
}

/// Number of DoNotAge LSA 0
fn rule_area_donotage() -> Rule {
    rule! {
        name: "area donotage lsa count",
        pattern: r"^Number +of +DoNotAge +LSA +(?P<count>\d+)$",
        action: |caps, st| {
            area_statistics(st)?.insert("donotage_lsa_count", caps.int("count")?);
            Ok(())
        },
    }
}

/// Flood list length 0
fn rule_area_flood_list() -> Rule {
    rule! {
        name: "area flood list length",
        pattern: r"^Flood +list +length +(?P<length>\d+)$",
        action: |caps, st| {
            area_statistics(st)?.insert("flood_list_length", caps.int("length")?);
            Ok(())
        },
    }
}

/// Number of LFA enabled interfaces 0, LFA revision 0
fn rule_area_lfa() -> Rule {
    rule! {
        name: "area lfa",
        pattern: r"^Number +of +LFA +enabled +interfaces +(?P<count>\d+), +LFA +revision +(?P<revision>\d+)$",
        action: |caps, st| {
            let stats = area_statistics(st)?;
            stats.insert("lfa_interface_count", caps.int("count")?);
            stats.insert("lfa_revision", caps.int("revision")?);
            Ok(())
        },
    }
}

/// Number of Per Prefix LFA enabled interfaces 0
fn rule_area_per_prefix_lfa() -> Rule {
    rule! {
        name: "area per-prefix lfa",
        pattern: r"^Number +of +Per +Prefix +LFA +enabled +interfaces +(?P<count>\d+)$",
        action: |caps, st| {
            area_statistics(st)?.insert("lfa_per_prefix_interface_count", caps.int("count")?);
            Ok(())
        },
    }
}

/// Number of neighbors forming in staggered mode 0, 2 full
fn rule_area_staggered() -> Rule {
    rule! {
        name: "area staggered neighbors",
        pattern: r"^Number +of +neighbors +forming +in +staggered +mode +(?P<staggered>\d+), +(?P<full>\d+) +full$",
        action: |caps, st| {
            let stats = area_statistics(st)?;
            stats.insert("nbrs_staggered_mode", caps.int("staggered")?);
            stats.insert("nbrs_full", caps.int("full")?);
            Ok(())
        },
    }
}

/// Maximum number of non self-generated LSA allowed 123
fn rule_max_lsa() -> Rule {
    rule! {
        name: "maximum lsa",
        pattern: r"^Maximum +number +of +non +self-generated +LSA +allowed +(?P<max>\d+)$",
        action: |caps, st| {
            instance_node(st)?.child_mut("database_control")?.insert("max_lsa", caps.int("max")?);
            Ok(())
        },
    }
}

pub fn get() -> Vec<Rule> {
    vec![
        rule_process(),
        rule_role(),
        rule_nsr(),
        rule_capabilities(),
        rule_not_originating(),
        rule_originating(),
        rule_condition(),
        rule_advertise_stub(),
        rule_advertise_summary(),
        rule_advertise_external(),
        rule_spf_start(),
        rule_spf_hold(),
        rule_spf_maximum(),
        rule_lsa_start(),
        rule_lsa_hold(),
        rule_lsa_maximum(),
        rule_lsa_interval(),
        rule_lsa_refresh(),
        rule_pacing(),
        rule_adjacency_stagger(),
        rule_neighbors_forming(),
        rule_configured_interfaces(),
        rule_external_lsa(),
        rule_opaque_as_lsa(),
        rule_dc_bitless(),
        rule_do_not_age(),
        rule_area_counts(),
        rule_external_flood_list(),
        rule_snmp_trap(),
        rule_lsd(),
        rule_srgb(),
        rule_strict_spf(),
        rule_area(),
        rule_area_interfaces(),
        rule_area_rrr(),
        rule_area_spf_runs(),
        rule_area_lsa(),
        rule_area_opaque_lsa(),
        rule_area_dcbitless(),
        rule_area_indication(),
        rule_area_donotage(),
        rule_area_flood_list(),
        rule_area_lfa(),
        rule_area_per_prefix_lfa(),
        rule_area_staggered(),
        rule_max_lsa(),
    ]
}

fn stub_condition_schema(condition: &str) -> Schema {
    Schema::map()
        .req(condition, Schema::boolean())
        .req("include_stub", Schema::boolean())
        .req("summary_lsa", Schema::boolean())
        .req("external_lsa", Schema::boolean())
        .opt("duration", Schema::int())
        .opt("state", Schema::text())
        .into()
}

pub fn schema() -> Schema {
    let area = Schema::map()
        .opt("area_type", Schema::text())
        .opt("rrr_enabled", Schema::boolean())
        .opt("topology_version", Schema::int())
        .opt(
            "statistics",
            Schema::map()
                .opt("interfaces_count", Schema::int())
                .opt("spf_runs_count", Schema::int())
                .opt("area_scope_lsa_count", Schema::int())
                .opt("area_scope_lsa_cksum_sum", Schema::text())
                .opt("area_scope_opaque_lsa_count", Schema::int())
                .opt("area_scope_opaque_lsa_cksum_sum", Schema::text())
                .opt("dcbitless_lsa_count", Schema::int())
                .opt("indication_lsa_count", Schema::int())
                .opt("donotage_lsa_count", Schema::int())
                .opt("flood_list_length", Schema::int())
                .opt("lfa_interface_count", Schema::int())
                .opt("lfa_revision", Schema::int())
                .opt("lfa_per_prefix_interface_count", Schema::int())
                .opt("nbrs_staggered_mode", Schema::int())
                .opt("nbrs_full", Schema::int()),
        );

    per_instance(
        Schema::map()
            .req("router_id", Schema::text())
            .req("role", Schema::text())
            .req("nsr", Schema::map().req("enable", Schema::boolean()))
            .opt("database_control", Schema::map().req("max_lsa", Schema::int()))
            .req(
                "stub_router",
                Schema::map()
                    .opt("always", stub_condition_schema("always"))
                    .opt("on_startup", stub_condition_schema("on_startup"))
                    .opt("on_switchover", stub_condition_schema("on_switchover")),
            )
            .req(
                "spf_control",
                Schema::map().opt("paths", Schema::text()).req(
                    "throttle",
                    Schema::map()
                        .req(
                            "spf",
                            Schema::map()
                                .req("start", Schema::int())
                                .req("hold", Schema::int())
                                .req("maximum", Schema::int()),
                        )
                        .req(
                            "lsa",
                            Schema::map()
                                .req("start", Schema::int())
                                .req("hold", Schema::int())
                                .req("maximum", Schema::int())
                                .req("interval", Schema::int())
                                .req("arrival", Schema::int())
                                .req("refresh_interval", Schema::int()),
                        ),
                ),
            )
            .opt("flood_pacing_interval", Schema::int())
            .opt("retransmission_interval", Schema::int())
            .opt(
                "adjacency_stagger",
                Schema::map()
                    .req("disable", Schema::boolean())
                    .req("initial_number", Schema::int())
                    .req("maximum_number", Schema::int()),
            )
            .opt(
                "numbers",
                Schema::map()
                    .opt("nbrs_forming", Schema::int())
                    .opt("nbrs_full", Schema::int())
                    .opt("configured_interfaces", Schema::int())
                    .opt("external_lsa", Schema::int())
                    .opt("external_lsa_checksum", Schema::text())
                    .opt("opaque_as_lsa", Schema::int())
                    .opt("opaque_as_lsa_checksum", Schema::text())
                    .opt("dc_bitless", Schema::int())
                    .opt("do_not_age", Schema::int()),
            )
            .opt("external_flood_list_length", Schema::int())
            .opt("snmp_trap", Schema::boolean())
            .opt("lsd_state", Schema::text())
            .opt("lsd_revision", Schema::int())
            .opt("segment_routing_global_block_default", Schema::text())
            .opt("strict_spf_capability", Schema::boolean())
            .opt("areas", Schema::any(area)),
    )
}

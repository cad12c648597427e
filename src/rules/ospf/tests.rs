use serde_json::json;

use crate::engine::Scope;
use crate::{Command, Error, Node, Options, RuleFault, SchemaError, Value, parse, parse_with, validate};

fn instance<'t>(tree: &'t Node, vrf: &str, id: &str) -> &'t Node {
    tree.lookup(["vrf", vrf, "address_family", "ipv4", "instance", id])
        .and_then(Value::as_map)
        .unwrap_or_else(|| panic!("no instance {id} in vrf {vrf}"))
}

fn record<'t>(node: &'t Node, keys: &[&str]) -> &'t Node {
    node.lookup(keys.iter().copied())
        .and_then(Value::as_map)
        .unwrap_or_else(|| panic!("no record at {keys:?}"))
}

fn to_json(node: &Node) -> serde_json::Value {
    serde_json::to_value(node).unwrap()
}

const INTERFACES_DEFAULT: &str = "
Interfaces for OSPF 1

Loopback0 is up, line protocol is up
  Internet Address 10.36.3.3/32, Area 0
  Process ID 1, Router ID 3.3.3.3, Network Type LOOPBACK, Cost: 1
  Loopback interface is treated as a stub Host
GigabitEthernet0/0/0/2 is up, line protocol is up
  Internet Address 10.2.3.3/24, Area 0
  Process ID 1, Router ID 3.3.3.3, Network Type BROADCAST, Cost: 1
  Transmit Delay is 1 sec, State BDR, Priority 1, MTU 1500, MaxPktSz 1500
  BFD enabled, BFD interval 150 msec, BFD multiplier 3, Mode: Default
  Designated Router (ID) 2.2.2.2, Interface address 10.2.3.2
  Backup Designated router (ID) 3.3.3.3, Interface address 10.2.3.3
  Flush timer for old DR LSA due in 00:00:07
  Timer intervals configured, Hello 10, Dead 40, Wait 40, Retransmit 5
    Hello due in 00:00:07:587
  Index 3/3, flood queue length 0
  Next 0(0)/0(0)
  Last flood scan length is 1, maximum is 6
  Last flood scan time is 0 msec, maximum is 0 msec
  LS Ack List: current length 0, high water mark 2
  Neighbor Count is 1, Adjacent neighbor count is 1
    Adjacent with neighbor 2.2.2.2  (Designated Router)
  Suppress hello for 0 neighbor(s)
  Multi-area interface Count is 0
";

const INTERFACES_VRF1: &str = "
Interfaces for OSPF 1, VRF VRF1

OSPF_SL0 is unknown, line protocol is up
  Internet Address 0.0.0.0/0, Area 1
  Process ID 1, VRF VRF1, Router ID 33.33.33.33, Network Type SHAM_LINK, Cost: 111
  Configured as demand circuit.
  Run as demand circuit.
  DoNotAge LSA not allowed (Number of DCbitless LSA is 1).
  Transmit Delay is 1 sec, State POINT_TO_POINT,
  Timer intervals configured, Hello 10, Dead 40, Wait 40, Retransmit 5
    Hello due in 00:00:02:026
OSPF_VL0 is up, line protocol is up
  Internet Address 0.0.0.0/0, Area 0
  Process ID 1, VRF VRF1, Router ID 33.33.33.33, Network Type VIRTUAL_LINK, Cost: 65535
";

#[test]
fn interface_defaults_and_fields() {
    let text = format!("{INTERFACES_DEFAULT}\n{INTERFACES_VRF1}");
    let tree = parse("interface", &text).unwrap();
    let default = instance(&tree, "default", "1");

    let loopback = record(default, &["areas", "0.0.0.0", "interfaces", "Loopback0"]);
    assert_eq!(
        to_json(loopback),
        json!({
            "name": "Loopback0",
            "enable": true,
            "line_protocol": true,
            "ip_address": "10.36.3.3/32",
            "demand_circuit": false,
            "bfd": {"enable": false},
            "process_id": "1",
            "router_id": "3.3.3.3",
            "interface_type": "loopback",
            "cost": 1,
        })
    );

    let gig = record(default, &["areas", "0.0.0.0", "interfaces", "GigabitEthernet0/0/0/2"]);
    assert_eq!(to_json(record(gig, &["bfd"])), json!({"enable": true, "interval": 150, "multiplier": 3, "mode": "Default"}));
    assert_eq!(gig.get("state").and_then(Value::as_text), Some("bdr"));
    assert_eq!(gig.get("priority").and_then(Value::as_int), Some(1));
    assert_eq!(gig.get("bdr_router_id").and_then(Value::as_text), Some("3.3.3.3"));
    assert_eq!(gig.get("passive").and_then(Value::as_bool), Some(false));
    assert_eq!(gig.get("hello_due_in").and_then(Value::as_text), Some("00:00:07:587"));
    assert_eq!(gig.get("ls_ack_list").and_then(Value::as_text), Some("current"));
    assert_eq!(gig.get("adj_nbr").and_then(Value::as_text), Some("2.2.2.2"));
    assert_eq!(gig.get("multi_area_intf_count").and_then(Value::as_int), Some(0));
}

#[test]
fn interface_pseudo_links_are_keyed_by_identity() {
    let text = format!("{INTERFACES_DEFAULT}\n{INTERFACES_VRF1}");
    let tree = parse("interface", &text).unwrap();
    let vrf1 = instance(&tree, "VRF1", "1");

    let sham = record(vrf1, &["areas", "0.0.0.1", "sham_links", "1 33.33.33.33"]);
    assert_eq!(sham.get("name").and_then(Value::as_text), Some("SL0"));
    assert_eq!(sham.get("enable").and_then(Value::as_bool), Some(false));
    assert_eq!(sham.get("interface_type").and_then(Value::as_text), Some("sham-link"));
    // Defaulted to false when the entry was created, then overridden.
    assert_eq!(sham.get("demand_circuit").and_then(Value::as_bool), Some(true));
    assert_eq!(sham.get("hello_interval").and_then(Value::as_int), Some(10));

    let virtual_link = record(vrf1, &["areas", "0.0.0.0", "virtual_links", "0.0.0.0 33.33.33.33"]);
    assert_eq!(virtual_link.get("name").and_then(Value::as_text), Some("VL0"));
    assert_eq!(virtual_link.get("cost").and_then(Value::as_int), Some(65535));
    assert_eq!(virtual_link.get("demand_circuit").and_then(Value::as_bool), Some(false));
}

#[test]
fn vrf_block_order_does_not_change_the_tree() {
    let forward = parse("interface", &format!("{INTERFACES_DEFAULT}\n{INTERFACES_VRF1}")).unwrap();
    let reversed = parse("interface", &format!("{INTERFACES_VRF1}\n{INTERFACES_DEFAULT}")).unwrap();
    assert_eq!(forward, reversed);
}

#[test]
fn interface_without_address_line_has_no_address() {
    let text = "
Interfaces for OSPF 1

GigabitEthernet0/0/0/0 is up, line protocol is up
  Internet Address 10.1.2.1/24, Area 0
  Process ID 1, Router ID 1.1.1.1, Network Type BROADCAST, Cost: 1
GigabitEthernet0/0/0/1 is down, line protocol is down
  Process ID 1, Router ID 1.1.1.1, Network Type BROADCAST, Cost: 1
";
    let options = Options { validate: false, ..Options::default() };
    let res = parse_with("interface", text, &options).unwrap();
    let default = instance(&res.tree, "default", "1");

    let first = record(default, &["areas", "0.0.0.0", "interfaces", "GigabitEthernet0/0/0/0"]);
    assert_eq!(first.get("ip_address").and_then(Value::as_text), Some("10.1.2.1/24"));

    let second = record(default, &["areas", "0.0.0.0", "interfaces", "GigabitEthernet0/0/0/1"]);
    assert_eq!(second.get("ip_address"), None);
    assert_eq!(second.get("enable").and_then(Value::as_bool), Some(false));
}

const NEIGHBORS: &str = "
Neighbors for OSPF 1

 Neighbor 2.2.2.2, interface address 10.2.3.2
    In the area 0 via interface GigabitEthernet0/0/0/2
    Neighbor priority is 1, State is FULL, 6 state changes
    DR is 10.2.3.3 BDR is 10.2.3.2
    Options is 0x42
    LLS Options is 0x1 (LR)
    Dead timer due in 00:00:38
    Neighbor is up for 08:22:07
    Number of DBD retrans during last exchange 0
    Index 1/1, retransmission queue length 0, number of retransmission 0
    First 0(0)/0(0) Next 0(0)/0(0)
    Last retransmission scan length is 0, maximum is 0
    Last retransmission scan time is 0 msec, maximum is 0 msec
    LS Ack list: NSR-sync pending 0, high water mark 0

Total neighbor count: 1

Neighbors for OSPF 1, VRF VRF1

 Neighbor 22.22.22.22, interface address 22.22.22.22
    In the area 1 via interface OSPF_SL0
    Neighbor priority is 0, State is FULL, 6 state changes
    DR is 0.0.0.0 BDR is 0.0.0.0
    Options is 0x72

Total neighbor count: 1
";

#[test]
fn neighbor_detail_record() {
    let tree = parse("neighbor-detail", NEIGHBORS).unwrap();
    let default = instance(&tree, "default", "1");
    assert_eq!(default.get("total_neighbor_count").and_then(Value::as_int), Some(1));

    let neighbor = record(
        default,
        &["areas", "0.0.0.0", "interfaces", "GigabitEthernet0/0/0/2", "neighbors", "2.2.2.2"],
    );
    assert_eq!(
        to_json(neighbor),
        json!({
            "neighbor_router_id": "2.2.2.2",
            "address": "10.2.3.2",
            "priority": 1,
            "state": "full",
            "num_state_changes": 6,
            "dr_ip_addr": "10.2.3.3",
            "bdr_ip_addr": "10.2.3.2",
            "options": "0x42",
            "lls_options": "0x1 (LR)",
            "dead_timer": "00:00:38",
            "neighbor_uptime": "08:22:07",
            "dbd_retrans": 0,
            "index": "1/1",
            "retransmission_queue_length": 0,
            "num_retransmission": 0,
            "first": "0(0)/0(0)",
            "next": "0(0)/0(0)",
            "last_retrans_scan_length": 0,
            "last_retrans_max_scan_length": 0,
            "last_retrans_scan_time_msec": 0,
            "last_retrans_max_scan_time_msec": 0,
            "ls_ack_list": "NSR-sync",
            "ls_ack_list_pending": 0,
            "high_water_mark": 0,
        })
    );
}

#[test]
fn sham_link_neighbor_is_keyed_by_area_and_address() {
    let tree = parse("neighbor-detail", NEIGHBORS).unwrap();
    let vrf1 = instance(&tree, "VRF1", "1");
    let neighbor =
        record(vrf1, &["areas", "0.0.0.1", "sham_links", "0.0.0.1 22.22.22.22", "neighbors", "22.22.22.22"]);
    assert_eq!(neighbor.get("priority").and_then(Value::as_int), Some(0));
    assert_eq!(neighbor.get("options").and_then(Value::as_text), Some("0x72"));
}

#[test]
fn priority_line_lands_only_on_the_current_neighbor() {
    let text = "
        Neighbors for OSPF 1
         Neighbor 2.2.2.2, interface address 10.1.2.2
            In the area 0 via interface GigabitEthernet0/0/0/0
            Neighbor priority is 1, State is FULL, 6 state changes
    ";
    let tree = crate::parse_with("neighbor-detail", text, &crate::Options { validate: false, trace: false })
        .unwrap()
        .tree;
    let interface = record(instance(&tree, "default", "1"), &["areas", "0.0.0.0", "interfaces", "GigabitEthernet0/0/0/0"]);
    let neighbors = record(interface, &["neighbors"]);
    assert_eq!(neighbors.len(), 1);

    let neighbor = record(neighbors, &["2.2.2.2"]);
    assert_eq!(neighbor.get("priority").and_then(Value::as_int), Some(1));
    assert_eq!(neighbor.get("state").and_then(Value::as_text), Some("full"));
    assert_eq!(neighbor.get("num_state_changes").and_then(Value::as_int), Some(6));
}

#[test]
fn detail_line_without_its_anchor_is_a_parse_error() {
    let err = parse("neighbor-detail", "Neighbor priority is 1, State is FULL, 6 state changes").unwrap_err();
    let Error::Parse(err) = err else {
        panic!("expected a parse error, got {err:?}");
    };
    assert_eq!(err.rule, "neighbor priority and state");
    assert_eq!(err.line, 1);
    assert!(matches!(err.fault, RuleFault::UnsetScope(Scope::Detail)));
}

const PROCESS: &str = r#"
Routing Process "ospf 1" with ID 3.3.3.3
Role: Primary Active
NSR (Non-stop routing) is Enabled
Supports only single TOS(TOS0) routes
Supports opaque LSA
It is an area border and autonomous system boundary router
Router is not originating router-LSAs with maximum metric
Initial SPF schedule delay 50 msecs
Minimum hold time between two consecutive SPFs 200 msecs
Maximum wait time between two consecutive SPFs 5000 msecs
Initial LSA throttle delay 50 msecs
Minimum hold time for LSA throttle 200 msecs
Maximum wait time for LSA throttle 5000 msecs
Minimum LSA interval 200 msecs. Minimum LSA arrival 100 msecs
LSA refresh interval 1800 seconds
Flood pacing interval 33 msecs. Retransmission pacing interval 66 msecs
Adjacency stagger enabled; initial (per area): 2, maximum: 64
    Number of neighbors forming: 0, 2 full
Maximum number of configured interfaces 1024
Number of external LSA 1. Checksum Sum 0x00607f
Number of opaque AS LSA 0. Checksum Sum 00000000
Number of DCbitless external and opaque AS LSA 0
Number of DoNotAge external and opaque AS LSA 0
Number of areas in this router is 1. 1 normal 0 stub 0 nssa
External flood list length 0
SNMP trap is enabled
LSD connected, registered, bound, revision 1
Segment Routing Global Block default (16000-23999), not allocated
Strict-SPF capability is enabled
    Area BACKBONE(0)
        Number of interfaces in this area is 3
        Area has RRR enabled, topology version 15
        SPF algorithm executed 26 times
        Number of LSA 19.  Checksum Sum 0x0a2fb5
        Number of opaque link LSA 0.  Checksum Sum 00000000
        Number of DCbitless LSA 5
        Number of indication LSA 0
        Number of DoNotAge LSA 0
        Flood list length 0
        Number of LFA enabled interfaces 0, LFA revision 0
        Number of Per Prefix LFA enabled interfaces 0
        Number of neighbors forming in staggered mode 0, 2 full

VRF VRF1 in Routing Process "ospf 1" with ID 33.33.33.33
Role: Primary Active
NSR (Non-stop routing) is Enabled
Originating router-LSAs with maximum metric
   Condition: on start-up for 5 seconds, State: inactive
      Advertise stub links with maximum metric in router-LSAs
      Advertise summary-LSAs with metric 16711680
   Condition: on switch-over for 10 seconds, State: inactive
Initial SPF schedule delay 50 msecs
Minimum hold time between two consecutive SPFs 200 msecs
Maximum wait time between two consecutive SPFs 5000 msecs
Initial LSA throttle delay 50 msecs
Minimum hold time for LSA throttle 200 msecs
Maximum wait time for LSA throttle 5000 msecs
Minimum LSA interval 200 msecs. Minimum LSA arrival 100 msecs
LSA refresh interval 1800 seconds
Maximum number of non self-generated LSA allowed 123
Number of areas in this router is 1. 1 normal 0 stub 0 nssa
    Area 1
        Number of interfaces in this area is 2
"#;

#[test]
fn process_summary() {
    let tree = parse("process", PROCESS).unwrap();
    let default = instance(&tree, "default", "ospf 1");

    assert_eq!(default.get("router_id").and_then(Value::as_text), Some("3.3.3.3"));
    assert_eq!(default.get("role").and_then(Value::as_text), Some("primary active"));
    assert_eq!(
        to_json(record(default, &["spf_control"])),
        json!({
            "throttle": {
                "spf": {"start": 50, "hold": 200, "maximum": 5000},
                "lsa": {
                    "start": 50,
                    "hold": 200,
                    "maximum": 5000,
                    "interval": 200,
                    "arrival": 100,
                    "refresh_interval": 1800,
                },
            },
        })
    );
    assert_eq!(
        to_json(record(default, &["stub_router"])),
        json!({"always": {"always": false, "include_stub": false, "summary_lsa": false, "external_lsa": false}})
    );
    assert_eq!(
        to_json(record(default, &["adjacency_stagger"])),
        json!({"disable": false, "initial_number": 2, "maximum_number": 64})
    );
    assert_eq!(default.get("lsd_state").and_then(Value::as_text), Some("connected, registered, bound"));
    assert_eq!(default.get("segment_routing_global_block_default").and_then(Value::as_text), Some("16000-23999"));
}

#[test]
fn process_backbone_area_is_dotted_quad() {
    let tree = parse("process", PROCESS).unwrap();
    let area = record(instance(&tree, "default", "ospf 1"), &["areas", "0.0.0.0"]);
    assert_eq!(area.get("area_type").and_then(Value::as_text), Some("normal"));
    assert_eq!(area.get("rrr_enabled").and_then(Value::as_bool), Some(true));

    let stats = record(area, &["statistics"]);
    assert_eq!(stats.get("spf_runs_count").and_then(Value::as_int), Some(26));
    assert_eq!(stats.get("area_scope_lsa_cksum_sum").and_then(Value::as_text), Some("0x0a2fb5"));
    assert_eq!(stats.get("nbrs_full").and_then(Value::as_int), Some(2));
}

#[test]
fn process_stub_router_conditions() {
    let tree = parse("process", PROCESS).unwrap();
    let vrf1 = instance(&tree, "VRF1", "ospf 1");
    assert_eq!(
        to_json(record(vrf1, &["stub_router"])),
        json!({
            "on_startup": {
                "on_startup": true,
                "include_stub": true,
                "summary_lsa": true,
                "external_lsa": false,
                "duration": 5,
                "state": "inactive",
            },
            "on_switchover": {
                "on_switchover": true,
                "include_stub": false,
                "summary_lsa": false,
                "external_lsa": false,
                "duration": 10,
                "state": "inactive",
            },
        })
    );
    assert_eq!(vrf1.lookup(["database_control", "max_lsa"]).and_then(Value::as_int), Some(123));
    assert!(vrf1.lookup(["areas", "0.0.0.1", "statistics"]).is_some());
}

const SHAM_LINKS: &str = "
Sham Links for OSPF 1, VRF VRF1

Sham Link OSPF_SL0 to address 22.22.22.22 is up
Area 1, source address 33.33.33.33
IfIndex = 2
  Run as demand circuit
  DoNotAge LSA not allowed (Number of DCbitless LSA is 1)., Cost of using 111
  Transmit Delay is 7 sec, State POINT_TO_POINT,
  Timer intervals configured, Hello 3, Dead 13, Wait 13, Retransmit 5
    Hello due in 00:00:00:772
";

#[test]
fn sham_link_record() {
    let tree = parse("sham-links", SHAM_LINKS).unwrap();
    let link = record(instance(&tree, "VRF1", "1"), &["areas", "0.0.0.1", "sham_links", "33.33.33.33 22.22.22.22"]);
    assert_eq!(
        to_json(link),
        json!({
            "transit_area_id": "0.0.0.1",
            "local_id": "33.33.33.33",
            "remote_id": "22.22.22.22",
            "name": "SL0",
            "demand_circuit": true,
            "if_index": 2,
            "dcbitless_lsa_count": 1,
            "cost": 111,
            "transmit_delay": 7,
            "state": "point-to-point",
            "hello_interval": 3,
            "dead_interval": 13,
            "wait_interval": 13,
            "retransmit_interval": 5,
            "hello_timer": "00:00:00:772",
        })
    );
}

const VIRTUAL_LINKS: &str = "
Virtual Links for OSPF 1

Virtual Link OSPF_VL0 to router 4.4.4.4 is up

  DoNotAge LSA not allowed Run as demand circuit (Number of DCbitless LSA is 7).
  Transit area 1, via interface GigabitEthernet0/0/0/3, Cost of using 65535
  Transmit Delay is 5 sec, State POINT_TO_POINT,
  Non-Stop Forwarding (NSF) enabled, last NSF restart 00:18:16 ago
  Timer intervals configured, Hello 10, Dead 40, Wait 40, Retransmit 5
    Hello due in 00:00:02:000
    Adjacency State FULL (Hello suppressed)
    Clear text authentication enabled
";

#[test]
fn virtual_link_picks_up_values_printed_before_it() {
    let tree = parse("virtual-links", VIRTUAL_LINKS).unwrap();
    let link = record(instance(&tree, "default", "1"), &["areas", "0.0.0.1", "virtual_links", "0.0.0.1 4.4.4.4"]);
    assert_eq!(
        to_json(link),
        json!({
            "transit_area_id": "0.0.0.1",
            "router_id": "4.4.4.4",
            "name": "VL0",
            "demand_circuit": true,
            "dcbitless_lsa_count": 7,
            "cost": 65535,
            "transmit_delay": 5,
            "state": "point-to-point",
            "nsf": {"enable": true, "last_restart": "00:18:16"},
            "hello_interval": 10,
            "dead_interval": 40,
            "wait_interval": 40,
            "retransmit_interval": 5,
            "hello_timer": "00:00:02:000",
            "authentication": {"auth_trailer_key": {"crypto_algorithm": "clear text"}},
        })
    );
}

#[test]
fn link_outputs_are_not_interchangeable() {
    // A virtual-link listing has no sham link record to satisfy that schema.
    let err = parse("sham-links", VIRTUAL_LINKS).unwrap_err();
    assert!(matches!(err, Error::Parse(_) | Error::Schema(SchemaError::Mismatch(_))));
}

const MPLS_TE_LINKS: &str = "
       OSPF Router with ID (3.3.3.3) (Process ID 1)

Area 0 has 1 MPLS TE links. Area instance is 2.

  Links in hash bucket 53.
    Link is associated with fragment 1. Link instance is 2
      Link connected to Broadcast network
      Link ID : 10.3.4.4
      Interface Address : 10.3.4.3
      Admin Metric : TE: 1
      Maximum bandwidth : 125000000
      Maximum global pool reservable bandwidth : 93750000
      Number of Priority : 8
      Priority 0 :             93750000  Priority 1 :           93750000
      Priority 2 :             93750000  Priority 3 :           93750000
      Priority 4 :             93750000  Priority 5 :           93750000
      Priority 6 :             93750000  Priority 7 :           93750000
      Out Interface ID : 4
      Affinity Bit : 0
      Extended Admin Group : 8
        EAG[0]: 0
        EAG[1]: 0

Area 1 MPLS TE not initialized
";

#[test]
fn mpls_te_links() {
    let tree = parse("mpls-te-links", MPLS_TE_LINKS).unwrap();
    let inst = instance(&tree, "default", "1");
    assert_eq!(inst.lookup(["mpls", "te", "router_id"]).and_then(Value::as_text), Some("3.3.3.3"));

    let te = record(inst, &["areas", "0.0.0.0", "mpls", "te"]);
    assert_eq!(te.get("enable").and_then(Value::as_bool), Some(true));
    assert_eq!(te.get("total_links").and_then(Value::as_int), Some(1));
    assert_eq!(te.get("area_instance").and_then(Value::as_int), Some(2));

    let fragment = record(te, &["link_fragments", "1"]);
    assert_eq!(fragment.get("network_type").and_then(Value::as_text), Some("broadcast"));
    assert_eq!(fragment.get("te_admin_metric").and_then(Value::as_int), Some(1));
    assert_eq!(fragment.get("out_interface_id").and_then(Value::as_int), Some(4));
    assert_eq!(record(fragment, &["unreserved_bandwidths"]).len(), 8);
    assert_eq!(
        to_json(record(fragment, &["unreserved_bandwidths", "7 93750000"])),
        json!({"priority": 7, "unreserved_bandwidth": 93750000})
    );
    assert_eq!(
        to_json(record(fragment, &["extended_admin_groups"])),
        json!({"0": {"value": 0}, "1": {"value": 0}})
    );

    let disabled = record(inst, &["areas", "0.0.0.1", "mpls", "te"]);
    assert_eq!(to_json(disabled), json!({"enable": false}));
}

const DATABASE_ROUTER: &str = "
            OSPF Router with ID (3.3.3.3) (Process ID 1)

                Router Link States (Area 0)

  Routing Bit Set on this LSA
  LS age: 1802
  Options: (No TOS-capability, DC)
  LS Type: Router Links
  Link State ID: 1.1.1.1
  Advertising Router: 1.1.1.1
  LS Seq Number: 8000003d
  Checksum: 0x5fda
  Length: 48
  Area Border Router
   Number of Links: 2

    Link connected to: a Stub Network
     (Link ID) Network/subnet number: 1.1.1.1
     (Link Data) Network Mask: 255.255.255.255
      Number of TOS metrics: 0
       TOS 0 Metrics: 1

    Link connected to: a Transit Network
     (Link ID) Designated Router address: 10.1.2.1
     (Link Data) Router Interface address: 10.1.2.1
      Number of TOS metrics: 0
       TOS 0 Metrics: 1

  LS age: 1683
  Options: (No TOS-capability, DC)
  LS Type: Router Links
  Link State ID: 2.2.2.2
  Advertising Router: 2.2.2.2
  LS Seq Number: 80000031
  Checksum: 0x6ef8
  Length: 36
   Number of Links: 1

    Link connected to: a Transit Network
     (Link ID) Designated Router address: 10.1.2.1
     (Link Data) Router Interface address: 10.1.2.2
      Number of TOS metrics: 0
       TOS 0 Metrics: 1
";

fn lsas<'t>(tree: &'t Node, vrf: &str, area: &str, code: &str) -> &'t Node {
    record(instance(tree, vrf, "1"), &["areas", area, "database", "lsa_types", code, "lsas"])
}

#[test]
fn database_router_lsas() {
    let tree = parse("database-router", DATABASE_ROUTER).unwrap();
    let lsas = lsas(&tree, "default", "0.0.0.0", "1");
    assert_eq!(lsas.len(), 2);

    let first = record(lsas, &["1.1.1.1 1.1.1.1"]);
    assert_eq!(
        to_json(record(first, &["ospfv2", "header"])),
        json!({
            "routing_bit_enable": true,
            "age": 1802,
            "option_desc": "No TOS-capability, DC",
            "type": 1,
            "lsa_id": "1.1.1.1",
            "adv_router": "1.1.1.1",
            "seq_num": "8000003d",
            "checksum": "0x5fda",
            "length": 48,
            "area_border_router": true,
        })
    );

    let body = record(first, &["ospfv2", "body", "router"]);
    assert_eq!(body.get("num_of_links").and_then(Value::as_int), Some(2));
    assert_eq!(
        to_json(record(body, &["links", "1.1.1.1"])),
        json!({
            "link_id": "1.1.1.1",
            "type": "stub network",
            "link_data": "255.255.255.255",
            "num_tos_metrics": 0,
            "topologies": {"0": {"mt_id": 0, "tos": 0, "metric": 1}},
        })
    );
    assert_eq!(
        body.lookup(["links", "10.1.2.1", "type"]).and_then(Value::as_text),
        Some("transit network")
    );
}

#[test]
fn database_header_fields_do_not_leak_into_the_next_lsa() {
    let tree = parse("database-router", DATABASE_ROUTER).unwrap();
    let header = record(lsas(&tree, "default", "0.0.0.0", "1"), &["2.2.2.2 2.2.2.2", "ospfv2", "header"]);
    assert!(!header.contains_key("routing_bit_enable"));
    assert!(!header.contains_key("area_border_router"));
    assert_eq!(header.get("age").and_then(Value::as_int), Some(1683));
}

const DATABASE_NETWORK: &str = "
            OSPF Router with ID (3.3.3.3) (Process ID 1, VRF VRF1)

                Net Link States (Area 1)

  LS age: 1713
  Options: (No TOS-capability, DC)
  LS Type: Network Links
  Link State ID: 10.186.5.1 (address of Designated Router)
  Advertising Router: 3.3.3.3
  LS Seq Number: 80000002
  Checksum: 0x9f63
  Length: 32
  Network Mask: /24
        Attached Router: 3.3.3.3
        Attached Router: 5.5.5.5
";

#[test]
fn database_network_lsa() {
    let tree = parse("database-network", DATABASE_NETWORK).unwrap();
    let lsa = record(lsas(&tree, "VRF1", "0.0.0.1", "2"), &["10.186.5.1 3.3.3.3"]);
    assert_eq!(
        to_json(record(lsa, &["ospfv2", "body", "network"])),
        json!({
            "network_mask": "255.255.255.0",
            "attached_routers": {"3.3.3.3": {}, "5.5.5.5": {}},
        })
    );
    assert_eq!(lsa.lookup(["ospfv2", "header", "type"]).and_then(Value::as_int), Some(2));
}

const DATABASE_SUMMARY: &str = "
            OSPF Router with ID (3.3.3.3) (Process ID 1)

                Summary Net Link States (Area 0)

  LS age: 1565
  Options: (No TOS-capability, DC, Downward)
  LS Type: Summary Links (Network)
  Link State ID: 10.186.4.0 (summary Network Number)
  Advertising Router: 3.3.3.3
  LS Seq Number: 80000002
  Checksum: 0x1f9b
  Length: 28
  Network Mask: /24
        TOS: 0  Metric: 1
";

#[test]
fn database_summary_lsa() {
    let tree = parse("database-summary", DATABASE_SUMMARY).unwrap();
    let lsa = record(lsas(&tree, "default", "0.0.0.0", "3"), &["10.186.4.0 3.3.3.3"]);
    assert_eq!(
        to_json(record(lsa, &["ospfv2", "body", "summary"])),
        json!({
            "network_mask": "255.255.255.0",
            "topologies": {"0": {"mt_id": 0, "tos": 0, "metric": 1}},
        })
    );
    assert_eq!(
        lsa.lookup(["ospfv2", "header", "option_desc"]).and_then(Value::as_text),
        Some("No TOS-capability, DC, Downward")
    );
}

const DATABASE_EXTERNAL: &str = "
            OSPF Router with ID (3.3.3.3) (Process ID 1)

                Type-5 AS External Link States

  Routing Bit Set on this LSA
  LS age: 1595
  Options: 0x20 (No TOS-capability, DC)
  LS Type: AS External Link
  Link State ID: 10.94.44.44 (External Network Number)
  Advertising Router: 4.4.4.4
  LS Seq Number: 80000002
  Checksum: 0x7d61
  Length: 36
  Network Mask: /32
        Metric Type: 2 (Larger than any link state path)
        TOS: 0
        Metric: 20
        Forward Address: 0.0.0.0
        External Route Tag: 0
";

#[test]
fn database_external_lsa_is_filed_under_the_backbone() {
    let tree = parse("database-external", DATABASE_EXTERNAL).unwrap();
    let lsa = record(lsas(&tree, "default", "0.0.0.0", "5"), &["10.94.44.44 4.4.4.4"]);
    assert_eq!(
        to_json(record(lsa, &["ospfv2", "body", "external"])),
        json!({
            "network_mask": "255.255.255.255",
            "topologies": {
                "0": {
                    "mt_id": 0,
                    "flags": "E",
                    "tos": 0,
                    "metric": 20,
                    "forwarding_address": "0.0.0.0",
                    "external_route_tag": "0",
                },
            },
        })
    );
    let header = record(lsa, &["ospfv2", "header"]);
    assert_eq!(header.get("option").and_then(Value::as_text), Some("0x20"));
    assert_eq!(header.get("routing_bit_enable").and_then(Value::as_bool), Some(true));
}

const DATABASE_OPAQUE: &str = "
            OSPF Router with ID (3.3.3.3) (Process ID 1)

                Type-10 Opaque Link Area Link States (Area 0)

  LS age: 420
  Options: (No TOS-capability, DC)
  LS Type: Opaque Area Link
  Link State ID: 1.0.0.0
  Opaque Type: 1
  Opaque ID: 0
  Advertising Router: 4.4.4.4
  LS Seq Number: 80000003
  Checksum: 0x56d2
  Length: 28

    MPLS TE router ID : 4.4.4.4

    Number of Links : 0

  LS age: 1111
  Options: (No TOS-capability, DC)
  LS Type: Opaque Area Link
  Link State ID: 1.0.0.38
  Opaque Type: 1
  Opaque ID: 38
  Advertising Router: 4.4.4.4
  LS Seq Number: 80000004
  Checksum: 0x8e40
  Length: 124
  Fragment number: 0

    Link connected to Broadcast network
      Link ID : 10.3.4.4
      Interface Address : 10.3.4.4
      Admin Metric : 1
      Maximum Bandwidth : 125000000
      Maximum reservable bandwidth global: 93750000
      Number of Priority : 8
      Priority 0 : 93750000    Priority 1 : 93750000
      Priority 2 : 93750000    Priority 3 : 93750000
      Priority 4 : 93750000    Priority 5 : 93750000
      Priority 6 : 93750000    Priority 7 : 93750000
      Affinity Bit : 0x0
      IGP Metric : 1
      Extended Administrative Group : Length: 8
       EAG[0]: 0
       EAG[1]: 0

    Number of Links : 1
";

#[test]
fn database_opaque_area_lsas() {
    let tree = parse("database-opaque-area", DATABASE_OPAQUE).unwrap();
    let lsas = lsas(&tree, "default", "0.0.0.0", "10");

    let te_router = record(lsas, &["1.0.0.0 4.4.4.4", "ospfv2"]);
    assert_eq!(te_router.lookup(["header", "mpls_te_router_id"]).and_then(Value::as_text), Some("4.4.4.4"));
    assert_eq!(te_router.lookup(["header", "opaque_id"]).and_then(Value::as_int), Some(0));
    assert_eq!(to_json(record(te_router, &["body", "opaque"])), json!({}));

    let link = record(lsas, &["1.0.0.38 4.4.4.4", "ospfv2"]);
    assert_eq!(link.lookup(["header", "fragment_number"]).and_then(Value::as_int), Some(0));
    assert_eq!(link.lookup(["header", "type"]).and_then(Value::as_int), Some(10));

    let tlv = record(link, &["body", "opaque", "link_tlvs", "1"]);
    assert_eq!(tlv.get("link_type").and_then(Value::as_int), Some(2));
    assert_eq!(tlv.get("link_name").and_then(Value::as_text), Some("broadcast network"));
    assert_eq!(tlv.get("te_metric").and_then(Value::as_int), Some(1));
    assert_eq!(tlv.get("max_reservable_bandwidth").and_then(Value::as_int), Some(93750000));
    assert_eq!(tlv.get("admin_group").and_then(Value::as_text), Some("0x0"));
    assert_eq!(to_json(record(tlv, &["local_if_ipv4_addrs"])), json!({"10.3.4.4": {}}));
    assert_eq!(to_json(record(tlv, &["remote_if_ipv4_addrs"])), json!({"0.0.0.0": {}}));
    assert_eq!(record(tlv, &["unreserved_bandwidths"]).len(), 8);
    assert_eq!(
        to_json(record(tlv, &["extended_admin_group"])),
        json!({"length": 8, "groups": {"0": {"value": 0}, "1": {"value": 0}}})
    );
}

#[test]
fn empty_output_is_reported_for_every_command() {
    for command in Command::ALL {
        let err = parse(command.cli(), "\n  \n").unwrap_err();
        assert!(matches!(err, Error::Schema(SchemaError::Empty)), "{command}: {err:?}");
    }
}

#[test]
fn parsing_is_deterministic_and_validation_idempotent() {
    let cases = [
        (Command::Interface, INTERFACES_DEFAULT),
        (Command::NeighborDetail, NEIGHBORS),
        (Command::Process, PROCESS),
        (Command::ShamLinks, SHAM_LINKS),
        (Command::VirtualLinks, VIRTUAL_LINKS),
        (Command::MplsTeLinks, MPLS_TE_LINKS),
        (Command::DatabaseRouter, DATABASE_ROUTER),
        (Command::DatabaseNetwork, DATABASE_NETWORK),
        (Command::DatabaseSummary, DATABASE_SUMMARY),
        (Command::DatabaseExternal, DATABASE_EXTERNAL),
        (Command::DatabaseOpaqueArea, DATABASE_OPAQUE),
    ];
    for (command, text) in cases {
        let first = parse(command.cli(), text).unwrap();
        let second = parse(command.name(), text).unwrap();
        assert_eq!(first, second, "{command}");
        assert_eq!(validate(&first, command.schema()), Ok(()));
        assert_eq!(validate(&first, command.schema()), Ok(()));
    }
}

#[test]
fn command_lookup_accepts_names_and_command_lines() {
    for command in Command::ALL {
        assert_eq!(Command::from_name(command.name()), Some(command));
        assert_eq!(Command::from_name(command.cli()), Some(command));
    }
    assert_eq!(Command::from_name("  SHOW OSPF   vrf all-inclusive "), Some(Command::Process));
    assert_eq!(Command::from_name("show ospf"), None);
}

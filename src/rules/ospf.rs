//! IOS-XR OSPF show commands.
//!
//! Each command pairs an ordered rule table with the closed schema its output
//! tree must satisfy. Tables are built once per process and shared:
//!
//! ```text
//! Command::Interface ──► interface::get()      ──► Lazy<Vec<Rule>>
//!                    └─► interface::schema()   ──► Lazy<Schema>
//! Command::ShamLinks ──► links::get(Sham)      (shared with VirtualLinks)
//! Command::Database* ──► database::get(kind)   (one table, five LSA kinds)
//! ```

use std::fmt;

use once_cell::sync::Lazy;

use crate::Rule;
use crate::schema::Schema;

mod database;
mod helpers;
mod interface;
mod links;
mod mpls_te;
mod neighbor;
mod process;

#[cfg(test)]
mod tests;

pub use database::LsaKind;
pub use links::LinkKind;

/// A supported show command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Interface,
    NeighborDetail,
    Process,
    ShamLinks,
    VirtualLinks,
    MplsTeLinks,
    DatabaseRouter,
    DatabaseNetwork,
    DatabaseSummary,
    DatabaseExternal,
    DatabaseOpaqueArea,
}

impl Command {
    pub const ALL: [Command; 11] = [
        Command::Interface,
        Command::NeighborDetail,
        Command::Process,
        Command::ShamLinks,
        Command::VirtualLinks,
        Command::MplsTeLinks,
        Command::DatabaseRouter,
        Command::DatabaseNetwork,
        Command::DatabaseSummary,
        Command::DatabaseExternal,
        Command::DatabaseOpaqueArea,
    ];

    /// The command line as typed on the device.
    pub fn cli(self) -> &'static str {
        match self {
            Command::Interface => "show ospf vrf all-inclusive interface",
            Command::NeighborDetail => "show ospf vrf all-inclusive neighbor detail",
            Command::Process => "show ospf vrf all-inclusive",
            Command::ShamLinks => "show ospf vrf all-inclusive sham-links",
            Command::VirtualLinks => "show ospf vrf all-inclusive virtual-links",
            Command::MplsTeLinks => "show ospf mpls traffic-eng links",
            Command::DatabaseRouter => "show ospf vrf all-inclusive database router",
            Command::DatabaseNetwork => "show ospf vrf all-inclusive database network",
            Command::DatabaseSummary => "show ospf vrf all-inclusive database summary",
            Command::DatabaseExternal => "show ospf vrf all-inclusive database external",
            Command::DatabaseOpaqueArea => "show ospf vrf all-inclusive database opaque-area",
        }
    }

    /// Short name used on the command line of this crate's binary.
    pub fn name(self) -> &'static str {
        match self {
            Command::Interface => "interface",
            Command::NeighborDetail => "neighbor-detail",
            Command::Process => "process",
            Command::ShamLinks => "sham-links",
            Command::VirtualLinks => "virtual-links",
            Command::MplsTeLinks => "mpls-te-links",
            Command::DatabaseRouter => "database-router",
            Command::DatabaseNetwork => "database-network",
            Command::DatabaseSummary => "database-summary",
            Command::DatabaseExternal => "database-external",
            Command::DatabaseOpaqueArea => "database-opaque-area",
        }
    }

    /// Look a command up by short name or by its full command line.
    /// Whitespace runs and letter case in the command line are ignored.
    pub fn from_name(name: &str) -> Option<Command> {
        let wanted = name.split_whitespace().collect::<Vec<_>>().join(" ").to_ascii_lowercase();
        Command::ALL.into_iter().find(|cmd| cmd.name() == wanted || cmd.cli() == wanted)
    }

    /// Ordered rule table.
    pub(crate) fn rules(self) -> &'static [Rule] {
        static INTERFACE: Lazy<Vec<Rule>> = Lazy::new(interface::get);
        static NEIGHBOR: Lazy<Vec<Rule>> = Lazy::new(neighbor::get);
        static PROCESS: Lazy<Vec<Rule>> = Lazy::new(process::get);
        static SHAM_LINKS: Lazy<Vec<Rule>> = Lazy::new(|| links::get(LinkKind::Sham));
        static VIRTUAL_LINKS: Lazy<Vec<Rule>> = Lazy::new(|| links::get(LinkKind::Virtual));
        static MPLS_TE: Lazy<Vec<Rule>> = Lazy::new(mpls_te::get);
        static DB_ROUTER: Lazy<Vec<Rule>> = Lazy::new(|| database::get(LsaKind::Router));
        static DB_NETWORK: Lazy<Vec<Rule>> = Lazy::new(|| database::get(LsaKind::Network));
        static DB_SUMMARY: Lazy<Vec<Rule>> = Lazy::new(|| database::get(LsaKind::Summary));
        static DB_EXTERNAL: Lazy<Vec<Rule>> = Lazy::new(|| database::get(LsaKind::External));
        static DB_OPAQUE: Lazy<Vec<Rule>> = Lazy::new(|| database::get(LsaKind::Opaque));

        match self {
            Command::Interface => &INTERFACE,
            Command::NeighborDetail => &NEIGHBOR,
            Command::Process => &PROCESS,
            Command::ShamLinks => &SHAM_LINKS,
            Command::VirtualLinks => &VIRTUAL_LINKS,
            Command::MplsTeLinks => &MPLS_TE,
            Command::DatabaseRouter => &DB_ROUTER,
            Command::DatabaseNetwork => &DB_NETWORK,
            Command::DatabaseSummary => &DB_SUMMARY,
            Command::DatabaseExternal => &DB_EXTERNAL,
            Command::DatabaseOpaqueArea => &DB_OPAQUE,
        }
    }

    /// Schema the output tree is validated against.
    pub fn schema(self) -> &'static Schema {
        static INTERFACE: Lazy<Schema> = Lazy::new(interface::schema);
        static NEIGHBOR: Lazy<Schema> = Lazy::new(neighbor::schema);
        static PROCESS: Lazy<Schema> = Lazy::new(process::schema);
        static SHAM_LINKS: Lazy<Schema> = Lazy::new(|| links::schema(LinkKind::Sham));
        static VIRTUAL_LINKS: Lazy<Schema> = Lazy::new(|| links::schema(LinkKind::Virtual));
        static MPLS_TE: Lazy<Schema> = Lazy::new(mpls_te::schema);
        static DB_ROUTER: Lazy<Schema> = Lazy::new(|| database::schema(LsaKind::Router));
        static DB_NETWORK: Lazy<Schema> = Lazy::new(|| database::schema(LsaKind::Network));
        static DB_SUMMARY: Lazy<Schema> = Lazy::new(|| database::schema(LsaKind::Summary));
        static DB_EXTERNAL: Lazy<Schema> = Lazy::new(|| database::schema(LsaKind::External));
        static DB_OPAQUE: Lazy<Schema> = Lazy::new(|| database::schema(LsaKind::Opaque));

        match self {
            Command::Interface => &INTERFACE,
            Command::NeighborDetail => &NEIGHBOR,
            Command::Process => &PROCESS,
            Command::ShamLinks => &SHAM_LINKS,
            Command::VirtualLinks => &VIRTUAL_LINKS,
            Command::MplsTeLinks => &MPLS_TE,
            Command::DatabaseRouter => &DB_ROUTER,
            Command::DatabaseNetwork => &DB_NETWORK,
            Command::DatabaseSummary => &DB_SUMMARY,
            Command::DatabaseExternal => &DB_EXTERNAL,
            Command::DatabaseOpaqueArea => &DB_OPAQUE,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cli())
    }
}

//! Conformance tooling for `netinet-core`.
//!
//! A reimplemented constant table is only useful if it provably agrees with
//! the platform it mirrors. This crate checks `netinet-core`'s values against
//! two oracles on the build host: the `libc` crate (for symbols the host C
//! library exports) and `std::net` address classification (for predicate
//! behavior). It also captures the full constant table as a JSON fixture so
//! that drift between builds or targets shows up as an explicit diff.

use std::collections::BTreeMap;
use std::net::{Ipv4Addr, Ipv6Addr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use netinet_core::{endian, inet, inet6, limits};

#[derive(Debug, Error)]
pub enum ConformanceError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// One constant compared against a host oracle value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstantCheck {
    pub name: String,
    pub ours: i128,
    pub host: i128,
    pub matches: bool,
}

/// One predicate evaluated against `std::net` classification of an address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorCheck {
    pub name: String,
    pub address: String,
    pub ours: bool,
    pub host: bool,
    pub matches: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub total: usize,
    pub mismatches: usize,
    pub constants: Vec<ConstantCheck>,
    pub behaviors: Vec<BehaviorCheck>,
}

impl ConformanceReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches == 0
    }
}

// ---------------------------------------------------------------------------
// Host conformance
// ---------------------------------------------------------------------------

/// Compares every host-mirrored constant and predicate against its oracle.
pub fn run_host_conformance() -> ConformanceReport {
    let mut constants = Vec::new();
    let mut check = |name: &str, ours: i128, host: i128| {
        constants.push(ConstantCheck {
            name: name.to_string(),
            ours,
            host,
            matches: ours == host,
        });
    };

    // Well-known IPv4 addresses vs the host libc.
    check("INADDR_ANY", inet::INADDR_ANY.into(), libc::INADDR_ANY.into());
    check(
        "INADDR_BROADCAST",
        inet::INADDR_BROADCAST.into(),
        libc::INADDR_BROADCAST.into(),
    );
    check("INADDR_NONE", inet::INADDR_NONE.into(), libc::INADDR_NONE.into());
    check(
        "INADDR_LOOPBACK",
        inet::INADDR_LOOPBACK.into(),
        libc::INADDR_LOOPBACK.into(),
    );

    // Protocol numbers vs the host libc.
    check("IPPROTO_IP", inet::IPPROTO_IP.into(), libc::IPPROTO_IP.into());
    check("IPPROTO_ICMP", inet::IPPROTO_ICMP.into(), libc::IPPROTO_ICMP.into());
    check("IPPROTO_IGMP", inet::IPPROTO_IGMP.into(), libc::IPPROTO_IGMP.into());
    check("IPPROTO_IPIP", inet::IPPROTO_IPIP.into(), libc::IPPROTO_IPIP.into());
    check("IPPROTO_TCP", inet::IPPROTO_TCP.into(), libc::IPPROTO_TCP.into());
    check("IPPROTO_EGP", inet::IPPROTO_EGP.into(), libc::IPPROTO_EGP.into());
    check("IPPROTO_PUP", inet::IPPROTO_PUP.into(), libc::IPPROTO_PUP.into());
    check("IPPROTO_UDP", inet::IPPROTO_UDP.into(), libc::IPPROTO_UDP.into());
    check("IPPROTO_IDP", inet::IPPROTO_IDP.into(), libc::IPPROTO_IDP.into());
    check("IPPROTO_DCCP", inet::IPPROTO_DCCP.into(), libc::IPPROTO_DCCP.into());
    check("IPPROTO_IPV6", inet::IPPROTO_IPV6.into(), libc::IPPROTO_IPV6.into());
    check("IPPROTO_RSVP", inet::IPPROTO_RSVP.into(), libc::IPPROTO_RSVP.into());
    check("IPPROTO_GRE", inet::IPPROTO_GRE.into(), libc::IPPROTO_GRE.into());
    check("IPPROTO_ESP", inet::IPPROTO_ESP.into(), libc::IPPROTO_ESP.into());
    check("IPPROTO_AH", inet::IPPROTO_AH.into(), libc::IPPROTO_AH.into());
    check(
        "IPPROTO_ICMPV6",
        inet::IPPROTO_ICMPV6.into(),
        libc::IPPROTO_ICMPV6.into(),
    );
    check("IPPROTO_PIM", inet::IPPROTO_PIM.into(), libc::IPPROTO_PIM.into());
    check("IPPROTO_COMP", inet::IPPROTO_COMP.into(), libc::IPPROTO_COMP.into());
    check("IPPROTO_SCTP", inet::IPPROTO_SCTP.into(), libc::IPPROTO_SCTP.into());
    check(
        "IPPROTO_UDPLITE",
        inet::IPPROTO_UDPLITE.into(),
        libc::IPPROTO_UDPLITE.into(),
    );
    check("IPPROTO_RAW", inet::IPPROTO_RAW.into(), libc::IPPROTO_RAW.into());

    // Integer bounds vs the native Rust primitives.
    check("INT8_MIN", limits::INT8_MIN.into(), i8::MIN.into());
    check("INT8_MAX", limits::INT8_MAX.into(), i8::MAX.into());
    check("INT16_MIN", limits::INT16_MIN.into(), i16::MIN.into());
    check("INT16_MAX", limits::INT16_MAX.into(), i16::MAX.into());
    check("INT32_MIN", limits::INT32_MIN.into(), i32::MIN.into());
    check("INT32_MAX", limits::INT32_MAX.into(), i32::MAX.into());
    check("INT64_MIN", limits::INT64_MIN.into(), i64::MIN.into());
    check("INT64_MAX", limits::INT64_MAX.into(), i64::MAX.into());
    check("UINT8_MAX", limits::UINT8_MAX.into(), u8::MAX.into());
    check("UINT16_MAX", limits::UINT16_MAX.into(), u16::MAX.into());
    check("UINT32_MAX", limits::UINT32_MAX.into(), u32::MAX.into());
    check("UINT64_MAX", limits::UINT64_MAX.into(), u64::MAX.into());
    check("INTPTR_MIN", limits::INTPTR_MIN as i128, isize::MIN as i128);
    check("INTPTR_MAX", limits::INTPTR_MAX as i128, isize::MAX as i128);
    check("UINTPTR_MAX", limits::UINTPTR_MAX as i128, usize::MAX as i128);
    check("SIZE_MAX", limits::SIZE_MAX as i128, usize::MAX as i128);

    let behaviors = run_behavior_checks();

    let mismatches = constants.iter().filter(|c| !c.matches).count()
        + behaviors.iter().filter(|b| !b.matches).count();
    ConformanceReport {
        total: constants.len() + behaviors.len(),
        mismatches,
        constants,
        behaviors,
    }
}

/// Evaluates the address predicates against `std::net` classification.
fn run_behavior_checks() -> Vec<BehaviorCheck> {
    let mut behaviors = Vec::new();
    let mut check = |name: &str, address: String, ours: bool, host: bool| {
        behaviors.push(BehaviorCheck {
            name: name.to_string(),
            address,
            ours,
            host,
            matches: ours == host,
        });
    };

    let v4_samples: [Ipv4Addr; 6] = [
        Ipv4Addr::new(10, 0, 0, 1),
        Ipv4Addr::new(127, 0, 0, 1),
        Ipv4Addr::new(192, 168, 1, 1),
        Ipv4Addr::new(224, 0, 0, 1),
        Ipv4Addr::new(239, 255, 255, 255),
        Ipv4Addr::new(255, 255, 255, 255),
    ];
    for a in v4_samples {
        let bits = u32::from(a);
        check(
            "in_multicast",
            a.to_string(),
            inet::in_multicast(bits),
            a.is_multicast(),
        );
        check(
            "broadcast",
            a.to_string(),
            bits == inet::INADDR_BROADCAST,
            a.is_broadcast(),
        );
    }

    let v6_samples: [Ipv6Addr; 6] = [
        Ipv6Addr::UNSPECIFIED,
        Ipv6Addr::LOCALHOST,
        "fe80::1".parse().unwrap(),
        "ff02::1".parse().unwrap(),
        "2001:db8::1".parse().unwrap(),
        "::ffff:192.0.2.1".parse().unwrap(),
    ];
    for a in v6_samples {
        let octets = a.octets();
        check(
            "is_unspecified",
            a.to_string(),
            inet6::is_unspecified(&octets),
            a.is_unspecified(),
        );
        check(
            "is_loopback",
            a.to_string(),
            inet6::is_loopback(&octets),
            a.is_loopback(),
        );
        check(
            "is_multicast",
            a.to_string(),
            inet6::is_multicast(&octets),
            a.is_multicast(),
        );
    }

    behaviors
}

// ---------------------------------------------------------------------------
// Constant-table fixtures
// ---------------------------------------------------------------------------

/// The full named constant table of `netinet-core`, widened to `i128`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstantTable {
    pub constants: BTreeMap<String, i128>,
}

/// Drift between a captured fixture and the current build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDiff {
    pub missing: Vec<String>,
    pub unexpected: Vec<String>,
    pub changed: Vec<ValueDrift>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueDrift {
    pub name: String,
    pub fixture: i128,
    pub current: i128,
}

impl TableDiff {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty() && self.changed.is_empty()
    }
}

/// Captures every named constant exported by `netinet-core`.
pub fn capture_constant_table() -> ConstantTable {
    let mut constants: BTreeMap<String, i128> = BTreeMap::new();
    let mut put = |name: &str, value: i128| {
        constants.insert(name.to_string(), value);
    };

    put("LITTLE_ENDIAN", endian::LITTLE_ENDIAN.into());
    put("BIG_ENDIAN", endian::BIG_ENDIAN.into());
    put("PDP_ENDIAN", endian::PDP_ENDIAN.into());
    put("BYTE_ORDER", endian::BYTE_ORDER.into());

    put("INADDR_ANY", inet::INADDR_ANY.into());
    put("INADDR_BROADCAST", inet::INADDR_BROADCAST.into());
    put("INADDR_NONE", inet::INADDR_NONE.into());
    put("INADDR_LOOPBACK", inet::INADDR_LOOPBACK.into());
    put("INADDR_UNSPEC_GROUP", inet::INADDR_UNSPEC_GROUP.into());
    put("INADDR_ALLHOSTS_GROUP", inet::INADDR_ALLHOSTS_GROUP.into());
    put("INADDR_ALLRTRS_GROUP", inet::INADDR_ALLRTRS_GROUP.into());
    put("INADDR_MAX_LOCAL_GROUP", inet::INADDR_MAX_LOCAL_GROUP.into());
    put("IN_LOOPBACKNET", inet::IN_LOOPBACKNET.into());
    put("INET_ADDRSTRLEN", inet::INET_ADDRSTRLEN as i128);
    put("INET6_ADDRSTRLEN", inet::INET6_ADDRSTRLEN as i128);

    put("IN_CLASSA_NET", inet::IN_CLASSA_NET.into());
    put("IN_CLASSA_NSHIFT", inet::IN_CLASSA_NSHIFT.into());
    put("IN_CLASSA_HOST", inet::IN_CLASSA_HOST.into());
    put("IN_CLASSA_MAX", inet::IN_CLASSA_MAX.into());
    put("IN_CLASSB_NET", inet::IN_CLASSB_NET.into());
    put("IN_CLASSB_NSHIFT", inet::IN_CLASSB_NSHIFT.into());
    put("IN_CLASSB_HOST", inet::IN_CLASSB_HOST.into());
    put("IN_CLASSB_MAX", inet::IN_CLASSB_MAX.into());
    put("IN_CLASSC_NET", inet::IN_CLASSC_NET.into());
    put("IN_CLASSC_NSHIFT", inet::IN_CLASSC_NSHIFT.into());
    put("IN_CLASSC_HOST", inet::IN_CLASSC_HOST.into());

    put("IPPROTO_IP", inet::IPPROTO_IP.into());
    put("IPPROTO_ICMP", inet::IPPROTO_ICMP.into());
    put("IPPROTO_IGMP", inet::IPPROTO_IGMP.into());
    put("IPPROTO_IPIP", inet::IPPROTO_IPIP.into());
    put("IPPROTO_TCP", inet::IPPROTO_TCP.into());
    put("IPPROTO_EGP", inet::IPPROTO_EGP.into());
    put("IPPROTO_PUP", inet::IPPROTO_PUP.into());
    put("IPPROTO_UDP", inet::IPPROTO_UDP.into());
    put("IPPROTO_IDP", inet::IPPROTO_IDP.into());
    put("IPPROTO_TP", inet::IPPROTO_TP.into());
    put("IPPROTO_DCCP", inet::IPPROTO_DCCP.into());
    put("IPPROTO_IPV6", inet::IPPROTO_IPV6.into());
    put("IPPROTO_RSVP", inet::IPPROTO_RSVP.into());
    put("IPPROTO_GRE", inet::IPPROTO_GRE.into());
    put("IPPROTO_ESP", inet::IPPROTO_ESP.into());
    put("IPPROTO_AH", inet::IPPROTO_AH.into());
    put("IPPROTO_ICMPV6", inet::IPPROTO_ICMPV6.into());
    put("IPPROTO_MTP", inet::IPPROTO_MTP.into());
    put("IPPROTO_BEETPH", inet::IPPROTO_BEETPH.into());
    put("IPPROTO_ENCAP", inet::IPPROTO_ENCAP.into());
    put("IPPROTO_PIM", inet::IPPROTO_PIM.into());
    put("IPPROTO_COMP", inet::IPPROTO_COMP.into());
    put("IPPROTO_SCTP", inet::IPPROTO_SCTP.into());
    put("IPPROTO_UDPLITE", inet::IPPROTO_UDPLITE.into());
    put("IPPROTO_MPLS", inet::IPPROTO_MPLS.into());
    put("IPPROTO_RAW", inet::IPPROTO_RAW.into());
    put("IPPORT_RESERVED", inet::IPPORT_RESERVED.into());
    put("IPPORT_USERRESERVED", inet::IPPORT_USERRESERVED.into());

    put("INT8_MIN", limits::INT8_MIN.into());
    put("INT8_MAX", limits::INT8_MAX.into());
    put("INT16_MIN", limits::INT16_MIN.into());
    put("INT16_MAX", limits::INT16_MAX.into());
    put("INT32_MIN", limits::INT32_MIN.into());
    put("INT32_MAX", limits::INT32_MAX.into());
    put("INT64_MIN", limits::INT64_MIN.into());
    put("INT64_MAX", limits::INT64_MAX.into());
    put("UINT8_MAX", limits::UINT8_MAX.into());
    put("UINT16_MAX", limits::UINT16_MAX.into());
    put("UINT32_MAX", limits::UINT32_MAX.into());
    put("UINT64_MAX", limits::UINT64_MAX.into());
    put("INT_LEAST8_MIN", limits::INT_LEAST8_MIN.into());
    put("INT_LEAST8_MAX", limits::INT_LEAST8_MAX.into());
    put("INT_LEAST16_MIN", limits::INT_LEAST16_MIN.into());
    put("INT_LEAST16_MAX", limits::INT_LEAST16_MAX.into());
    put("INT_LEAST32_MIN", limits::INT_LEAST32_MIN.into());
    put("INT_LEAST32_MAX", limits::INT_LEAST32_MAX.into());
    put("INT_LEAST64_MIN", limits::INT_LEAST64_MIN.into());
    put("INT_LEAST64_MAX", limits::INT_LEAST64_MAX.into());
    put("UINT_LEAST8_MAX", limits::UINT_LEAST8_MAX.into());
    put("UINT_LEAST16_MAX", limits::UINT_LEAST16_MAX.into());
    put("UINT_LEAST32_MAX", limits::UINT_LEAST32_MAX.into());
    put("UINT_LEAST64_MAX", limits::UINT_LEAST64_MAX.into());
    put("INT_FAST8_MIN", limits::INT_FAST8_MIN.into());
    put("INT_FAST8_MAX", limits::INT_FAST8_MAX.into());
    put("INT_FAST16_MIN", limits::INT_FAST16_MIN.into());
    put("INT_FAST16_MAX", limits::INT_FAST16_MAX.into());
    put("INT_FAST32_MIN", limits::INT_FAST32_MIN.into());
    put("INT_FAST32_MAX", limits::INT_FAST32_MAX.into());
    put("INT_FAST64_MIN", limits::INT_FAST64_MIN.into());
    put("INT_FAST64_MAX", limits::INT_FAST64_MAX.into());
    put("UINT_FAST8_MAX", limits::UINT_FAST8_MAX.into());
    put("UINT_FAST16_MAX", limits::UINT_FAST16_MAX.into());
    put("UINT_FAST32_MAX", limits::UINT_FAST32_MAX.into());
    put("UINT_FAST64_MAX", limits::UINT_FAST64_MAX.into());
    put("INTPTR_MIN", limits::INTPTR_MIN as i128);
    put("INTPTR_MAX", limits::INTPTR_MAX as i128);
    put("UINTPTR_MAX", limits::UINTPTR_MAX as i128);
    put("INTMAX_MIN", limits::INTMAX_MIN.into());
    put("INTMAX_MAX", limits::INTMAX_MAX.into());
    put("UINTMAX_MAX", limits::UINTMAX_MAX.into());
    put("PTRDIFF_MIN", limits::PTRDIFF_MIN as i128);
    put("PTRDIFF_MAX", limits::PTRDIFF_MAX as i128);
    put("SIZE_MAX", limits::SIZE_MAX as i128);
    put("SIG_ATOMIC_MIN", limits::SIG_ATOMIC_MIN.into());
    put("SIG_ATOMIC_MAX", limits::SIG_ATOMIC_MAX.into());
    put("WCHAR_MIN", limits::WCHAR_MIN.into());
    put("WCHAR_MAX", limits::WCHAR_MAX.into());
    put("WINT_MIN", limits::WINT_MIN.into());
    put("WINT_MAX", limits::WINT_MAX.into());

    ConstantTable { constants }
}

/// Compares a captured fixture against the current build's table.
pub fn verify_constant_table(fixture: &ConstantTable) -> TableDiff {
    let current = capture_constant_table();
    let mut diff = TableDiff {
        missing: Vec::new(),
        unexpected: Vec::new(),
        changed: Vec::new(),
    };

    for (name, &fixture_value) in &fixture.constants {
        match current.constants.get(name) {
            None => diff.missing.push(name.clone()),
            Some(&current_value) if current_value != fixture_value => {
                diff.changed.push(ValueDrift {
                    name: name.clone(),
                    fixture: fixture_value,
                    current: current_value,
                });
            }
            Some(_) => {}
        }
    }
    for name in current.constants.keys() {
        if !fixture.constants.contains_key(name) {
            diff.unexpected.push(name.clone());
        }
    }

    diff
}

// ---------------------------------------------------------------------------
// Markdown rendering
// ---------------------------------------------------------------------------

/// Renders a host-conformance report as a markdown document.
pub fn render_conformance_markdown(report: &ConformanceReport) -> String {
    let mut out = String::new();
    out.push_str("# netinet-core host conformance\n\n");
    out.push_str(&format!(
        "{} checks, {} mismatches\n\n",
        report.total, report.mismatches
    ));

    out.push_str("## Constants\n\n");
    out.push_str("| name | ours | host | ok |\n");
    out.push_str("| --- | --- | --- | --- |\n");
    for c in &report.constants {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            c.name,
            c.ours,
            c.host,
            if c.matches { "yes" } else { "NO" }
        ));
    }

    out.push_str("\n## Predicate behavior\n\n");
    out.push_str("| predicate | address | ours | host | ok |\n");
    out.push_str("| --- | --- | --- | --- | --- |\n");
    for b in &report.behaviors {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            b.name,
            b.address,
            b.ours,
            b.host,
            if b.matches { "yes" } else { "NO" }
        ));
    }

    out
}

/// Renders a fixture drift diff as a markdown document.
pub fn render_drift_markdown(diff: &TableDiff) -> String {
    let mut out = String::new();
    out.push_str("# netinet-core constant drift\n\n");
    if diff.is_clean() {
        out.push_str("No drift against fixture.\n");
        return out;
    }
    if !diff.changed.is_empty() {
        out.push_str("## Changed values\n\n");
        out.push_str("| name | fixture | current |\n");
        out.push_str("| --- | --- | --- |\n");
        for d in &diff.changed {
            out.push_str(&format!("| {} | {} | {} |\n", d.name, d.fixture, d.current));
        }
        out.push('\n');
    }
    if !diff.missing.is_empty() {
        out.push_str("## Missing from this build\n\n");
        for name in &diff.missing {
            out.push_str(&format!("- {name}\n"));
        }
        out.push('\n');
    }
    if !diff.unexpected.is_empty() {
        out.push_str("## Not in fixture\n\n");
        for name in &diff.unexpected {
            out.push_str(&format!("- {name}\n"));
        }
    }
    out
}

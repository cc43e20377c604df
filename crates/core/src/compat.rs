//! Compatibility rule engine -- pure logic, no I/O.
//!
//! Two entry points: [`evaluate`] runs the full rule set over a selection
//! and returns user-facing warnings in a fixed order, and [`preview`]
//! runs the single targeted socket check used while a drag is in
//! progress, before a part is committed to a slot. The two must agree:
//! a drop that `preview` accepts never introduces a socket warning in
//! `evaluate`.

use crate::part::{Part, PartKind};
use crate::selection::Selection;

/// Fixed safety headroom demanded above the estimated draw, in watts.
pub const POWER_HEADROOM_WATTS: i64 = 100;

/// Evaluate all compatibility rules against a selection.
///
/// Returns an ordered sequence of standalone warning strings; an empty
/// result means "all parts compatible". Rule order is part of the
/// contract: socket first, then power.
pub fn evaluate(selection: &Selection) -> Vec<String> {
    let mut warnings = Vec::new();

    // Rule 1: cpu and motherboard must agree on socket. The comparison is
    // case-sensitive and only runs when both sides declare a socket.
    if let (Some(cpu), Some(mobo)) = (
        selection.get(PartKind::Cpu),
        selection.get(PartKind::Motherboard),
    ) {
        if let (Some(cpu_socket), Some(mobo_socket)) =
            (&cpu.compatibility.socket, &mobo.compatibility.socket)
        {
            if cpu_socket != mobo_socket {
                warnings.push(format!(
                    "Socket mismatch: {} {} needs {}, but {} has {}.",
                    cpu.brand, cpu.name, cpu_socket, mobo.name, mobo_socket
                ));
            }
        }
    }

    // Rule 2: psu capacity vs estimated draw. The draw sums the wattage
    // field of every occupied slot, the psu's own capacity figure
    // included. Known modeling quirk; kept as-is so the warning
    // thresholds users have already seen stay stable.
    if let Some(psu) = selection.get(PartKind::Psu) {
        let total_draw: i64 = selection
            .occupied()
            .map(|(_, part)| part.compatibility.wattage.unwrap_or(0))
            .sum();
        if psu.compatibility.wattage.unwrap_or(0) < total_draw + POWER_HEADROOM_WATTS {
            warnings.push(format!(
                "Power supply might be insufficient. Total estimated draw: {total_draw}W."
            ));
        }
    }

    warnings
}

/// Targeted drag-over check for a candidate part against the current
/// selection, covering only the cpu <-> motherboard socket relation for
/// the candidate's own slot.
///
/// Returns the rejection message the drop target should surface, or
/// `None` when the drop would be accepted. Parts of any other kind never
/// produce a preview warning.
pub fn preview(candidate: &Part, selection: &Selection) -> Option<String> {
    match candidate.kind {
        PartKind::Cpu => {
            let mobo = selection.get(PartKind::Motherboard)?;
            let candidate_socket = candidate.compatibility.socket.as_deref()?;
            let mobo_socket = mobo.compatibility.socket.as_deref()?;
            (candidate_socket != mobo_socket).then(|| {
                format!(
                    "Socket Mismatch: {} needs {}",
                    candidate.name, candidate_socket
                )
            })
        }
        PartKind::Motherboard => {
            let cpu = selection.get(PartKind::Cpu)?;
            let candidate_socket = candidate.compatibility.socket.as_deref()?;
            let cpu_socket = cpu.compatibility.socket.as_deref()?;
            (candidate_socket != cpu_socket).then(|| {
                format!(
                    "Socket Mismatch: {} uses {}",
                    candidate.name, candidate_socket
                )
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::Compatibility;
    use serde_json::json;

    fn part(kind: PartKind, brand: &str, name: &str, price: i64) -> Part {
        Part {
            id: price,
            name: name.to_string(),
            kind,
            brand: brand.to_string(),
            price,
            specs: json!({}),
            image: None,
            compatibility: Compatibility::default(),
        }
    }

    fn cpu(name: &str, socket: &str, wattage: i64) -> Part {
        let mut p = part(PartKind::Cpu, "AMD", name, 19800);
        p.compatibility.socket = Some(socket.to_string());
        p.compatibility.wattage = Some(wattage);
        p
    }

    fn motherboard(name: &str, socket: &str) -> Part {
        let mut p = part(PartKind::Motherboard, "ASUS", name, 45000);
        p.compatibility.socket = Some(socket.to_string());
        p.compatibility.form_factor = Some("ATX".to_string());
        p
    }

    fn gpu(name: &str, wattage: i64) -> Part {
        let mut p = part(PartKind::Gpu, "ASUS ROG", name, 185000);
        p.compatibility.wattage = Some(wattage);
        p
    }

    fn psu(name: &str, capacity: i64) -> Part {
        let mut p = part(PartKind::Psu, "Deepcool", name, 3800);
        p.compatibility.wattage = Some(capacity);
        p
    }

    // -- evaluate: socket rule --

    #[test]
    fn empty_selection_is_all_compatible() {
        let selection = Selection::default();
        assert_eq!(selection.total(), 0);
        assert!(evaluate(&selection).is_empty());
    }

    #[test]
    fn matching_sockets_produce_no_warning() {
        let mut selection = Selection::default();
        let mut am5_cpu = cpu("Ryzen 7 7800X3D", "AM5", 120);
        am5_cpu.price = 38900;
        let mut am5_board = motherboard("MSI MAG B650 Tomahawk", "AM5");
        am5_board.price = 22500;
        selection.set(PartKind::Cpu, am5_cpu).unwrap();
        selection.set(PartKind::Motherboard, am5_board).unwrap();

        assert_eq!(selection.total(), 61400);
        assert!(evaluate(&selection).is_empty());
    }

    #[test]
    fn socket_mismatch_emits_exact_message() {
        let mut selection = Selection::default();
        selection
            .set(PartKind::Cpu, cpu("Ryzen 5 7600X", "AM5", 105))
            .unwrap();
        selection
            .set(
                PartKind::Motherboard,
                motherboard("ASUS ROG Strix Z790-E", "LGA1700"),
            )
            .unwrap();

        let warnings = evaluate(&selection);
        assert_eq!(
            warnings,
            vec![
                "Socket mismatch: AMD Ryzen 5 7600X needs AM5, but ASUS ROG Strix Z790-E has LGA1700."
                    .to_string()
            ]
        );
    }

    #[test]
    fn socket_rule_skipped_when_either_side_lacks_socket() {
        let mut selection = Selection::default();
        let mut socketless = cpu("Mystery CPU", "AM5", 65);
        socketless.compatibility.socket = None;
        selection.set(PartKind::Cpu, socketless).unwrap();
        selection
            .set(PartKind::Motherboard, motherboard("B760M DS3H", "LGA1700"))
            .unwrap();
        assert!(evaluate(&selection).is_empty());

        let mut selection = Selection::default();
        selection
            .set(PartKind::Cpu, cpu("Core i5-13600K", "LGA1700", 125))
            .unwrap();
        let mut bare_board = motherboard("Bare Board", "AM5");
        bare_board.compatibility.socket = None;
        selection.set(PartKind::Motherboard, bare_board).unwrap();
        assert!(evaluate(&selection).is_empty());
    }

    #[test]
    fn socket_compare_is_case_sensitive() {
        let mut selection = Selection::default();
        selection
            .set(PartKind::Cpu, cpu("Ryzen 5 7600X", "AM5", 105))
            .unwrap();
        selection
            .set(PartKind::Motherboard, motherboard("MAG B650", "am5"))
            .unwrap();
        assert_eq!(evaluate(&selection).len(), 1);
    }

    // -- evaluate: power rule --

    #[test]
    fn power_rule_does_not_run_without_psu() {
        let mut selection = Selection::default();
        selection
            .set(PartKind::Cpu, cpu("Core i9-14900K", "LGA1700", 125))
            .unwrap();
        selection
            .set(PartKind::Gpu, gpu("RTX 4090", 450))
            .unwrap();
        assert!(evaluate(&selection).is_empty());
    }

    #[test]
    fn insufficient_psu_counts_its_own_wattage_in_the_draw() {
        let mut selection = Selection::default();
        selection
            .set(PartKind::Cpu, cpu("Core i9-14900K", "LGA1700", 125))
            .unwrap();
        selection.set(PartKind::Gpu, gpu("RTX 4090", 450)).unwrap();
        selection.set(PartKind::Psu, psu("PK550D", 550)).unwrap();

        // Draw is 125 + 450 + 550 = 1125: the psu's own capacity figure is
        // part of the sum.
        let warnings = evaluate(&selection);
        assert_eq!(
            warnings,
            vec!["Power supply might be insufficient. Total estimated draw: 1125W.".to_string()]
        );
    }

    #[test]
    fn any_selected_psu_warns_because_its_capacity_counts_as_draw() {
        // Because the psu's own capacity is part of the draw, the headroom
        // check can never pass once a psu is selected.
        let mut selection = Selection::default();
        selection
            .set(PartKind::Cpu, cpu("Core i3-12100F", "LGA1700", 58))
            .unwrap();
        selection.set(PartKind::Psu, psu("RM850e", 850)).unwrap();
        assert_eq!(
            evaluate(&selection),
            vec!["Power supply might be insufficient. Total estimated draw: 908W.".to_string()]
        );

        let mut solo = Selection::default();
        solo.set(PartKind::Psu, psu("RM850e", 850)).unwrap();
        assert_eq!(evaluate(&solo).len(), 1);
    }

    #[test]
    fn parts_without_wattage_contribute_zero_draw() {
        let mut selection = Selection::default();
        let storage = part(PartKind::Storage, "Samsung", "990 Pro 1TB", 9200);
        selection.set(PartKind::Storage, storage).unwrap();
        let mut capacity_only = psu("MWE 750 Gold", 750);
        capacity_only.compatibility.wattage = Some(750);
        selection.set(PartKind::Psu, capacity_only).unwrap();

        // Draw is 0 + 750 = 750; 750 < 850 still warns (quirk again).
        let warnings = evaluate(&selection);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("750W"));
    }

    #[test]
    fn warning_order_is_socket_then_power() {
        let mut selection = Selection::default();
        selection
            .set(PartKind::Cpu, cpu("Ryzen 5 7600X", "AM5", 105))
            .unwrap();
        selection
            .set(
                PartKind::Motherboard,
                motherboard("ASUS ROG Strix Z790-E", "LGA1700"),
            )
            .unwrap();
        selection.set(PartKind::Psu, psu("PK550D", 550)).unwrap();

        let warnings = evaluate(&selection);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("Socket mismatch:"));
        assert!(warnings[1].starts_with("Power supply might be insufficient."));
    }

    #[test]
    fn evaluate_is_idempotent() {
        let mut selection = Selection::default();
        selection
            .set(PartKind::Cpu, cpu("Ryzen 5 7600X", "AM5", 105))
            .unwrap();
        selection
            .set(
                PartKind::Motherboard,
                motherboard("ASUS ROG Strix Z790-E", "LGA1700"),
            )
            .unwrap();
        assert_eq!(evaluate(&selection), evaluate(&selection));
    }

    // -- preview --

    #[test]
    fn preview_cpu_against_selected_motherboard() {
        let mut selection = Selection::default();
        selection
            .set(
                PartKind::Motherboard,
                motherboard("ASUS ROG Strix Z790-E", "LGA1700"),
            )
            .unwrap();

        let warning = preview(&cpu("Ryzen 5 7600X", "AM5", 105), &selection).unwrap();
        assert_eq!(warning, "Socket Mismatch: Ryzen 5 7600X needs AM5");

        assert!(preview(&cpu("Core i5-13600K", "LGA1700", 125), &selection).is_none());
    }

    #[test]
    fn preview_motherboard_against_selected_cpu() {
        let mut selection = Selection::default();
        selection
            .set(PartKind::Cpu, cpu("Ryzen 5 7600X", "AM5", 105))
            .unwrap();

        let warning = preview(&motherboard("ASUS ROG Strix Z790-E", "LGA1700"), &selection)
            .unwrap();
        assert_eq!(
            warning,
            "Socket Mismatch: ASUS ROG Strix Z790-E uses LGA1700"
        );

        assert!(preview(&motherboard("MAG B650 Tomahawk", "AM5"), &selection).is_none());
    }

    #[test]
    fn preview_ignores_other_kinds_and_empty_counterpart() {
        let selection = Selection::default();
        assert!(preview(&cpu("Ryzen 5 7600X", "AM5", 105), &selection).is_none());
        assert!(preview(&gpu("RTX 4090", 450), &selection).is_none());

        let mut with_mobo = Selection::default();
        with_mobo
            .set(PartKind::Motherboard, motherboard("B760M DS3H", "LGA1700"))
            .unwrap();
        assert!(preview(&psu("RM850e", 850), &with_mobo).is_none());
    }

    #[test]
    fn preview_skips_when_socket_info_is_missing() {
        let mut selection = Selection::default();
        let mut bare_board = motherboard("Bare Board", "AM5");
        bare_board.compatibility.socket = None;
        selection.set(PartKind::Motherboard, bare_board).unwrap();
        assert!(preview(&cpu("Ryzen 5 7600X", "AM5", 105), &selection).is_none());
    }

    #[test]
    fn preview_agrees_with_evaluate_on_accepts() {
        // A drop preview accepts must not introduce a socket warning in
        // the aggregate evaluation afterwards.
        let mut selection = Selection::default();
        selection
            .set(
                PartKind::Motherboard,
                motherboard("MAG B650 Tomahawk", "AM5"),
            )
            .unwrap();

        let candidate = cpu("Ryzen 7 7800X3D", "AM5", 120);
        assert!(preview(&candidate, &selection).is_none());
        selection.set(PartKind::Cpu, candidate).unwrap();
        assert!(evaluate(&selection)
            .iter()
            .all(|w| !w.starts_with("Socket mismatch:")));
    }
}

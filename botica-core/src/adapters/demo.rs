//! Demo data provider
//!
//! Deterministic sample export batches with the quirks of real files: dates
//! written only on the first line of each day, currency cells with comma
//! decimals and euro signs, a return line, and mixed payment types. The
//! batches enter through the normal ingest path, so demo mode exercises the
//! whole pipeline rather than pre-built records.

use crate::schema::RawRow;

fn row(pairs: &[(&str, &str)]) -> RawRow {
    pairs
        .iter()
        .map(|(h, v)| (h.to_string(), v.to_string()))
        .collect()
}

fn tx_row(
    fecha: &str,
    hora: &str,
    vendedor: &str,
    codigo: &str,
    descripcion: &str,
    uni: &str,
    bruto: &str,
    dto: &str,
    neto: &str,
    doc: &str,
    pago: &str,
) -> RawRow {
    row(&[
        ("Fecha", fecha),
        ("Hora", hora),
        ("Vendedor", vendedor),
        ("Código", codigo),
        ("Cliente / Descripción", descripcion),
        ("Tipo", "Contado"),
        ("Uni.", uni),
        ("Imp. Bruto", bruto),
        ("Dto.", dto),
        ("Imp. Neto", neto),
        ("Número Doc.", doc),
        ("Tipo de Pago", pago),
    ])
}

/// A transactions export: three business days, two sellers, one return
pub fn transactions_batch() -> Vec<RawRow> {
    vec![
        tx_row(
            "03/03/2025", "9:12", "(9)9 A LORENZO", "704512.3",
            "IBUPROFENO 600MG 40 SOBRES", "1", "4,95 €", "0", "4,95 €",
            "B120031/2025", "Efectivo",
        ),
        tx_row(
            "", "9:12", "(9)9 A LORENZO", "651220.8",
            "PARACETAMOL 1G 40 COMP", "2", "7,90 €", "0,40", "7,50 €",
            "B120031/2025", "Efectivo",
        ),
        tx_row(
            "", "10:03", "(3)3 M GARCIA", "712008.1",
            "CREMA HIDRATANTE 200ML", "1", "12,50 €", "0", "12,50 €",
            "B120032/2025", "Tarjeta",
        ),
        tx_row(
            "", "12:47", "(3)3 M GARCIA", "704512.3",
            "IBUPROFENO 600MG 40 SOBRES", "-1", "-4,95 €", "0", "-4,95 €",
            "B120033/2025", "Efectivo",
        ),
        tx_row(
            "04/03/2025", "9:31", "(9)9 A LORENZO", "689004.7",
            "OMEPRAZOL 20MG 28 CAPS", "1", "3,12 €", "0", "3,12 €",
            "B120034/2025", "Efectivo",
        ),
        tx_row(
            "", "11:20", "(9)9 A LORENZO", "712008.1",
            "CREMA HIDRATANTE 200ML", "2", "25,00 €", "2,50", "22,50 €",
            "B120035/2025", "Tarjeta",
        ),
        tx_row(
            "", "17:55", "(3)3 M GARCIA", "651220.8",
            "PARACETAMOL 1G 40 COMP", "1", "3,95 €", "0", "3,95 €",
            "B120036/2025", "Tarjeta",
        ),
        tx_row(
            "05/03/2025", "10:14", "(3)3 M GARCIA", "698470.2",
            "AMOXICILINA 500MG 24 CAPS", "1", "6,80 €", "0", "6,80 €",
            "B120037/2025", "Efectivo",
        ),
        tx_row(
            "", "13:02", "(9)9 A LORENZO", "704512.3",
            "IBUPROFENO 600MG 40 SOBRES", "3", "14,85 €", "1,00", "13,85 €",
            "B120038/2025", "Tarjeta",
        ),
        tx_row(
            "", "19:40", "(9)9 A LORENZO", "725113.9",
            "PROTECTOR SOLAR SPF50 50ML", "1", "18,95 €", "0", "18,95 €",
            "B120039/2025", "Tarjeta",
        ),
    ]
}

fn cat_row(
    codigo: &str,
    descripcion: &str,
    familia: &str,
    s_actual: &str,
    pvp: &str,
    pmc: &str,
    margen: &str,
    uds: &str,
    total: &str,
    laboratorio: &str,
) -> RawRow {
    row(&[
        ("Código", codigo),
        ("Descripción", descripcion),
        ("Familia", familia),
        ("Situación", "Activo"),
        ("S.Actual", s_actual),
        ("P.v.p.", pvp),
        ("P.m.c.", pmc),
        ("%Margen a Pmc", margen),
        ("Uds.Vendidas", uds),
        ("Tot.Venta", total),
        ("Laboratorio", laboratorio),
    ])
}

/// A catalog export covering the products of the transactions batch
pub fn categories_batch() -> Vec<RawRow> {
    vec![
        cat_row(
            "704512.3", "IBUPROFENO 600MG 40 SOBRES", "ANALGESICOS",
            "35", "4,95", "2,60", "47,5", "210", "1.039,50", "CINFA",
        ),
        cat_row(
            "651220.8", "PARACETAMOL 1G 40 COMP", "ANALGESICOS",
            "52", "3,95", "1,98", "49,9", "340", "1.343,00", "KERN PHARMA",
        ),
        cat_row(
            "712008.1", "CREMA HIDRATANTE 200ML", "DERMOFARMACIA",
            "18", "12,50", "6,80", "45,6", "64", "800,00", "ISDIN",
        ),
        cat_row(
            "689004.7", "OMEPRAZOL 20MG 28 CAPS", "DIGESTIVO",
            "44", "3,12", "1,55", "50,3", "150", "468,00", "NORMON",
        ),
        cat_row(
            "698470.2", "AMOXICILINA 500MG 24 CAPS", "ANTIBIOTICOS",
            "27", "6,80", "3,40", "50,0", "88", "598,40", "SANDOZ",
        ),
        cat_row(
            "725113.9", "PROTECTOR SOLAR SPF50 50ML", "DERMOFARMACIA",
            "12", "18,95", "10,20", "46,2", "41", "776,95", "ISDIN",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{RecordKind, Schema};
    use crate::services::detect::detect_record_kind;

    #[test]
    fn test_batches_classify_as_their_kinds() {
        let schema = Schema::standard();
        assert_eq!(
            detect_record_kind(&transactions_batch(), &schema),
            Some(RecordKind::Transactions)
        );
        assert_eq!(
            detect_record_kind(&categories_batch(), &schema),
            Some(RecordKind::Categories)
        );
    }

    #[test]
    fn test_transactions_batch_carries_run_on_dates() {
        let batch = transactions_batch();
        let dated = batch.iter().filter(|r| !r["Fecha"].is_empty()).count();
        assert!(dated >= 2);
        assert!(dated < batch.len());
    }

    #[test]
    fn test_transactions_batch_carries_a_return() {
        let batch = transactions_batch();
        assert!(batch.iter().any(|r| r["Imp. Bruto"].starts_with('-')));
    }
}

//! Translation tables for Turkish and English reports

pub const TR: &[(&str, &str)] = &[
    ("audit_report", "DENETİM RAPORU"),
    ("executive_summary", "ÖZET YÖNETİCİ RAPORU"),
    ("table_of_contents", "İÇİNDEKİLER"),
    ("scope_methodology", "DENETİM KAPSAMI VE METODOLOJİSİ"),
    ("findings", "BULGULAR"),
    ("conclusion", "SONUÇ VE ÖNERİLER"),
    ("appendices", "EKLER"),
    ("standard", "Standart"),
    ("organization", "Organizasyon"),
    ("project", "Proje"),
    ("audit_date", "Denetim Tarihi"),
    ("report_date", "Rapor Tarihi"),
    ("not_specified", "Belirtilmemiş"),
    ("finding_distribution", "Bulgu Dağılımı:"),
    ("finding", "bulgu"),
    ("no_findings", "Denetim kapsamında bulgu tespit edilmemiştir."),
    ("finding_title", "BULGU"),
    ("severity", "Önem Derecesi"),
    ("status_label", "Durum"),
    ("control_reference", "Kontrol Referansı"),
    ("description", "Açıklama"),
    ("recommendation", "Öneri"),
    ("evidence_count", "Kanıt Sayısı"),
    ("evidence_desc", "Açıklama"),
    ("image_load_failed", "görüntü yüklenemedi"),
    ("file_not_found", "dosya bulunamadı"),
    ("scope", "Denetim Kapsamı"),
    ("scope_text", "Bu denetim {standard} standartı kapsamında gerçekleştirilmiştir."),
    (
        "summary_text",
        "Bu rapor, {audit_name} denetimi kapsamında yapılan incelemelerin sonuçlarını içermektedir. \
         Denetim {standard} standartına uygun olarak gerçekleştirilmiş ve toplamda {findings_count} \
         bulgu tespit edilmiştir.",
    ),
    (
        "conclusion_text",
        "Bu denetim raporu, {audit_name} denetimi kapsamında tespit edilen bulguları ve önerileri \
         içermektedir. Organizasyonun ilgili standartlara uygunluğunu artırmak için belirtilen \
         önerilerin değerlendirilmesi ve uygulanması önerilmektedir.",
    ),
    ("appendix_a", "Ek A: Denetim Metadataları"),
    ("audit_id", "Denetim ID"),
    ("created_date", "Oluşturulma Tarihi"),
    ("last_update", "Son Güncelleme"),
    ("severity_critical", "Kritik"),
    ("severity_high", "Yüksek"),
    ("severity_medium", "Orta"),
    ("severity_low", "Düşük"),
    ("severity_info", "Bilgi"),
    ("status_open", "Açık"),
    ("status_in_progress", "Devam Ediyor"),
    ("status_resolved", "Çözüldü"),
    ("status_closed", "Kapatıldı"),
];

pub const EN: &[(&str, &str)] = &[
    ("audit_report", "AUDIT REPORT"),
    ("executive_summary", "EXECUTIVE SUMMARY"),
    ("table_of_contents", "TABLE OF CONTENTS"),
    ("scope_methodology", "AUDIT SCOPE AND METHODOLOGY"),
    ("findings", "FINDINGS"),
    ("conclusion", "CONCLUSION AND RECOMMENDATIONS"),
    ("appendices", "APPENDICES"),
    ("standard", "Standard"),
    ("organization", "Organization"),
    ("project", "Project"),
    ("audit_date", "Audit Date"),
    ("report_date", "Report Date"),
    ("not_specified", "Not Specified"),
    ("finding_distribution", "Finding Distribution:"),
    ("finding", "finding(s)"),
    ("no_findings", "No findings were identified during the audit."),
    ("finding_title", "FINDING"),
    ("severity", "Severity"),
    ("status_label", "Status"),
    ("control_reference", "Control Reference"),
    ("description", "Description"),
    ("recommendation", "Recommendation"),
    ("evidence_count", "Evidence Count"),
    ("evidence_desc", "Description"),
    ("image_load_failed", "image could not be loaded"),
    ("file_not_found", "file not found"),
    ("scope", "Audit Scope"),
    ("scope_text", "This audit was conducted in accordance with the {standard} standard."),
    (
        "summary_text",
        "This report contains the results of the {audit_name} audit. The audit was conducted in \
         accordance with the {standard} standard and a total of {findings_count} findings were \
         identified.",
    ),
    (
        "conclusion_text",
        "This audit report contains the findings and recommendations identified during the \
         {audit_name} audit. It is recommended that the organization evaluate and implement the \
         recommendations to improve compliance with relevant standards.",
    ),
    ("appendix_a", "Appendix A: Audit Metadata"),
    ("audit_id", "Audit ID"),
    ("created_date", "Created Date"),
    ("last_update", "Last Update"),
    ("severity_critical", "Critical"),
    ("severity_high", "High"),
    ("severity_medium", "Medium"),
    ("severity_low", "Low"),
    ("severity_info", "Info"),
    ("status_open", "Open"),
    ("status_in_progress", "In Progress"),
    ("status_resolved", "Resolved"),
    ("status_closed", "Closed"),
];

pub const TR_TOC: [&str; 5] = [
    "1. Özet Yönetici Raporu",
    "2. Denetim Kapsamı ve Metodolojisi",
    "3. Bulgular",
    "4. Sonuç ve Öneriler",
    "5. Ekler",
];

pub const EN_TOC: [&str; 5] = [
    "1. Executive Summary",
    "2. Audit Scope and Methodology",
    "3. Findings",
    "4. Conclusion and Recommendations",
    "5. Appendices",
];

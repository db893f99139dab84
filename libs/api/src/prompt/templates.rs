use crate::sales_text::request::SalesTextRequest;

/// Language reported for requests that match no table entry.
pub const DEFAULT_LANGUAGE: &str = "default";

pub struct SalesTemplate {
    pub language: &'static str,
    /// Alternative keys, compared case-insensitively.
    pub aliases: &'static [&'static str],
    pub system_instruction: &'static str,
    pub acknowledgement: &'static str,
    pub user_message: fn(&SalesTextRequest) -> String,
}

pub struct CopyTemplate {
    pub language: &'static str,
    pub aliases: &'static [&'static str],
    pub system_instruction: &'static str,
    pub acknowledgement: &'static str,
    pub brief: &'static str,
    pub keywords: &'static str,
    pub closing: &'static str,
}

pub static SALES_TEMPLATES: &[SalesTemplate] = &[
    SalesTemplate {
        language: "English",
        aliases: &["en"],
        system_instruction: "You are a highly creative and persuasive sales copy expert. Your task is to craft compelling sales copy in English. Focus on benefits for the target audience and use the requested tone. Always respond in English.",
        acknowledgement: "Ready! Share the details of your product or service.",
        user_message: english_sales_message,
    },
    SalesTemplate {
        language: "Indonesian",
        aliases: &["id", "bahasa indonesia"],
        system_instruction: "Anda adalah pakar penulisan iklan penjualan yang sangat kreatif dan persuasif. Tugas Anda adalah membuat salinan penjualan yang menarik dalam Bahasa Indonesia. Fokus pada manfaat bagi audiens target dan gunakan nada yang diminta. Selalu respon dalam Bahasa Indonesia.",
        acknowledgement: "Siap! Berikan detail produk/layanan Anda.",
        user_message: indonesian_sales_message,
    },
    SalesTemplate {
        language: "Spanish",
        aliases: &["es", "español", "espanol"],
        system_instruction: "Eres un experto en redacción de textos de venta altamente creativo y persuasivo. Tu tarea es crear textos de venta atractivos en español. Céntrate en los beneficios para el público objetivo y utiliza el tono solicitado. Responde siempre en español.",
        acknowledgement: "¡Listo! Comparte los detalles de tu producto o servicio.",
        user_message: spanish_sales_message,
    },
    SalesTemplate {
        language: "French",
        aliases: &["fr", "français", "francais"],
        system_instruction: "Vous êtes un expert en rédaction de textes de vente très créatif et persuasif. Votre tâche est de créer des textes de vente percutants en français. Concentrez-vous sur les avantages pour le public cible et utilisez le ton demandé. Répondez toujours en français.",
        acknowledgement: "Prêt ! Donnez-moi les détails de votre produit ou service.",
        user_message: french_sales_message,
    },
    SalesTemplate {
        language: "German",
        aliases: &["de", "deutsch"],
        system_instruction: "Sie sind ein hochkreativer und überzeugender Experte für Verkaufstexte. Ihre Aufgabe ist es, ansprechende Verkaufstexte auf Deutsch zu erstellen. Konzentrieren Sie sich auf die Vorteile für die Zielgruppe und verwenden Sie den angeforderten Ton. Antworten Sie immer auf Deutsch.",
        acknowledgement: "Bereit! Nennen Sie mir die Details Ihres Produkts oder Ihrer Dienstleistung.",
        user_message: german_sales_message,
    },
];

/// Language-neutral entry used when no table key matches.
pub static DEFAULT_SALES_TEMPLATE: SalesTemplate = SalesTemplate {
    language: DEFAULT_LANGUAGE,
    aliases: &[],
    system_instruction: "You are a creative and persuasive sales expert. Generate compelling sales copy. Focus on benefits for the target audience and use the requested tone.",
    acknowledgement: "Ready! Share the details of your product or service.",
    user_message: english_sales_message,
};

pub static COPY_TEMPLATES: &[CopyTemplate] = &[
    CopyTemplate {
        language: "Indonesian",
        aliases: &["id", "bahasa indonesia"],
        system_instruction: "Anda adalah penulis iklan pemasaran yang kreatif dan persuasif. Tulis teks pemasaran yang menarik dalam Bahasa Indonesia berdasarkan arahan pengguna. Selalu respon dalam Bahasa Indonesia.",
        acknowledgement: "Siap! Berikan arahan Anda.",
        brief: "Tulis teks pemasaran untuk arahan berikut:",
        keywords: "Sertakan kata kunci berikut secara alami:",
        closing: "Buatlah singkat, persuasif, dan menarik perhatian.",
    },
];

pub static DEFAULT_COPY_TEMPLATE: CopyTemplate = CopyTemplate {
    language: "English",
    aliases: &["en"],
    system_instruction: "You are a creative and persuasive marketing copywriter. Write compelling marketing copy in English based on the user's brief. Always respond in English.",
    acknowledgement: "Ready! Share your brief.",
    brief: "Write marketing copy for the following brief:",
    keywords: "Include these keywords naturally:",
    closing: "Keep it concise, persuasive, and attention-grabbing.",
};

fn english_sales_message(r: &SalesTextRequest) -> String {
    format!(
        "Generate sales text for the product/service \"{}\".\n\
         Target audience: {}.\n\
         Key selling points: {}.\n\
         Use a {} tone.\n\
         Desired length: {}.\n\
         Make it concise, impactful, and highly attention-grabbing.",
        r.product_name, r.audience, r.selling_points, r.tone, r.length
    )
}

fn indonesian_sales_message(r: &SalesTextRequest) -> String {
    format!(
        "Buatkan teks penjualan untuk produk/layanan \"{}\".\n\
         Target audiens: {}.\n\
         Poin-poin penjualan utama: {}.\n\
         Gunakan nada: {}.\n\
         Panjang yang diinginkan: {}.\n\
         Buatlah singkat, padat, dan sangat menarik perhatian.",
        r.product_name, r.audience, r.selling_points, r.tone, r.length
    )
}

fn spanish_sales_message(r: &SalesTextRequest) -> String {
    format!(
        "Genera texto de ventas para el producto/servicio \"{}\".\n\
         Público objetivo: {}.\n\
         Puntos clave de venta: {}.\n\
         Usa un tono: {}.\n\
         Longitud deseada: {}.\n\
         Hazlo conciso, impactante y que capte la atención.",
        r.product_name, r.audience, r.selling_points, r.tone, r.length
    )
}

fn french_sales_message(r: &SalesTextRequest) -> String {
    format!(
        "Générez un texte de vente pour le produit/service \"{}\".\n\
         Public cible : {}.\n\
         Points de vente clés : {}.\n\
         Utilisez un ton : {}.\n\
         Longueur souhaitée : {}.\n\
         Rendez-le concis, percutant et très accrocheur.",
        r.product_name, r.audience, r.selling_points, r.tone, r.length
    )
}

fn german_sales_message(r: &SalesTextRequest) -> String {
    format!(
        "Generieren Sie Verkaufstexte für das Produkt/die Dienstleistung \"{}\".\n\
         Zielgruppe: {}.\n\
         Wichtigste Verkaufsargumente: {}.\n\
         Verwenden Sie einen Ton: {}.\n\
         Gewünschte Länge: {}.\n\
         Machen Sie es prägnant, wirkungsvoll und sehr aufmerksamkeitsstark.",
        r.product_name, r.audience, r.selling_points, r.tone, r.length
    )
}

fn matches(language: &str, key: &str, aliases: &[&str]) -> bool {
    let key = key.trim().to_lowercase();
    language.to_lowercase() == key || aliases.iter().any(|alias| *alias == key)
}

pub fn sales_template(key: &str) -> &'static SalesTemplate {
    SALES_TEMPLATES
        .iter()
        .find(|t| matches(t.language, key, t.aliases))
        .unwrap_or(&DEFAULT_SALES_TEMPLATE)
}

pub fn copy_template(key: Option<&str>) -> &'static CopyTemplate {
    let Some(key) = key else {
        return &DEFAULT_COPY_TEMPLATE;
    };

    COPY_TEMPLATES
        .iter()
        .find(|t| matches(t.language, key, t.aliases))
        .unwrap_or(&DEFAULT_COPY_TEMPLATE)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_table_keys_are_unique() {
        let mut keys: Vec<String> = SALES_TEMPLATES
            .iter()
            .flat_map(|t| {
                std::iter::once(t.language.to_lowercase())
                    .chain(t.aliases.iter().map(|a| a.to_string()))
            })
            .collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();

        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_copy_english_resolves_to_default() {
        assert_eq!(copy_template(Some("en")).language, "English");
        assert_eq!(copy_template(Some("ID")).language, "Indonesian");
    }
}

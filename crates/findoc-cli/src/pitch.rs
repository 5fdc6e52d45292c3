//! The FinApp pitch deck
//!
//! Twelve slides, each laid out in code on the blank widescreen layout.
//! All positions are in inches from the top-left corner.

use anyhow::{Context, Result};
use findoc_core::{Length, Rgb, Theme};
use findoc_pptx::{Anchor, Bounds, Canvas, DeckTheme, PptxWriter, Slide, TextStyle, CHECK};
use tracing::info;

use crate::config::Settings;

/// Height of a widescreen slide
const SLIDE_HEIGHT: f64 = 7.5;

/// Title written into the package properties
pub const TITLE: &str = "FinApp - Pitch Deck";

/// Build every slide in presentation order
pub fn build_slides(theme: &Theme) -> Vec<Slide> {
    vec![
        cover(theme),
        problem(theme),
        root_causes(theme),
        market_today(theme),
        comparison(theme),
        hero(theme),
        features(theme),
        assistant(theme),
        evidence(theme),
        opportunity(theme),
        why_finapp(theme),
        call_to_action(theme),
    ]
}

/// Build the deck and package it as `.pptx` bytes
pub fn render(settings: &Settings) -> Result<Vec<u8>> {
    let theme = &settings.theme;
    let mut writer = PptxWriter::new(DeckTheme::from_theme(theme))
        .with_title(TITLE)
        .with_metadata(settings.metadata.clone());
    writer.add_slides(build_slides(theme));

    let bytes = writer.generate().context("Failed to generate the pitch deck")?;
    info!(slides = writer.slides().len(), "Pitch deck built");
    Ok(bytes)
}

/// Small caps label above a slide headline
fn section_label(canvas: &mut Canvas<'_>, top: f64, text: &str, color: Rgb) {
    canvas.add_text_box(
        Bounds::inches(0.8, top, 3.0, 0.4),
        text,
        &TextStyle::new(11.0, color).bold(),
    );
}

/// Thin accent stripe down the left edge
fn left_stripe(canvas: &mut Canvas<'_>) {
    let accent = canvas.theme().palette.emerald_600;
    canvas.add_rect(Bounds::inches(0.0, 0.0, 0.12, SLIDE_HEIGHT), accent);
}

fn source_note(canvas: &mut Canvas<'_>, top: f64, text: &str) {
    let muted = canvas.theme().palette.slate_400;
    canvas.add_text_box(
        Bounds::inches(0.8, top, 10.0, 0.4),
        text,
        &TextStyle::new(9.0, muted),
    );
}

fn cover(theme: &Theme) -> Slide {
    let p = &theme.palette;
    let mut c = Canvas::new(theme, p.slate_900);

    left_stripe(&mut c);
    c.add_oval(Bounds::inches(9.5, -1.0, 4.0, 4.0), p.slate_800);
    c.add_oval(Bounds::inches(10.5, 5.0, 3.5, 3.5), p.slate_800);

    c.add_text_box(
        Bounds::inches(1.2, 1.8, 5.0, 1.0),
        "FinApp",
        &TextStyle::new(56.0, p.emerald_500).bold(),
    );
    c.add_text_box(
        Bounds::inches(1.2, 3.0, 7.0, 0.8),
        "Gestao financeira pessoal inteligente.",
        &TextStyle::new(26.0, p.white),
    );
    c.add_text_box(
        Bounds::inches(1.2, 3.8, 8.0, 0.7),
        "Controle completo. Projecoes reais. Assistente com IA.",
        &TextStyle::new(16.0, p.slate_400),
    );

    c.add_rect(
        Bounds::new(Length::inches(1.2), Length::inches(5.8), Length::inches(1.5), Length::pt(3.0)),
        p.emerald_600,
    );
    c.add_text_box(
        Bounds::inches(1.2, 6.1, 5.0, 0.5),
        "Fevereiro 2026",
        &TextStyle::new(12.0, p.slate_500),
    );
    c.finish()
}

fn problem(theme: &Theme) -> Slide {
    let p = &theme.palette;
    let mut c = Canvas::new(theme, p.white);

    section_label(&mut c, 0.5, "O CENARIO ATUAL", p.emerald_600);
    c.add_multiline_text(
        Bounds::inches(0.8, 1.0, 11.0, 1.5),
        &[(
            "Metade do Brasil esta no vermelho.",
            TextStyle::new(36.0, p.slate_900).bold(),
        )],
        Anchor::Top,
    );
    c.add_text_box(
        Bounds::inches(0.8, 2.2, 10.0, 0.7),
        "81,2 milhoes de brasileiros estao inadimplentes \u{2014} recorde historico.",
        &TextStyle::new(18.0, p.slate_600),
    );

    let stats = [
        ("48%", "dos brasileiros\nnao controlam o\nproprio orcamento", p.rose_500, 48.0),
        ("R$ 518 bi", "em dividas acumuladas\npelos inadimplentes\nem dezembro de 2025", p.amber_500, 40.0),
        ("77,5%", "das familias\nbrasileiras estao\nendividadas", p.blue_500, 48.0),
    ];
    for (i, (number, label, accent, size)) in stats.into_iter().enumerate() {
        let x = 0.8 + i as f64 * (3.6 + 0.5);
        c.stat_card(Bounds::inches(x, 3.5, 3.6, 3.0), number, label, accent, size);
    }

    source_note(&mut c, 6.8, "Fontes: Serasa (Dez/2025), CNDL/SPC Brasil, CNC/Agencia Brasil");
    c.finish()
}

fn root_causes(theme: &Theme) -> Slide {
    let p = &theme.palette;
    let mut c = Canvas::new(theme, p.slate_50);

    section_label(&mut c, 0.5, "A RAIZ DO PROBLEMA", p.emerald_600);
    c.add_text_box(
        Bounds::inches(0.8, 1.0, 10.0, 1.0),
        "Por que as pessoas nao controlam suas financas?",
        &TextStyle::new(32.0, p.slate_900).bold(),
    );

    let reasons = [
        (
            "\u{2716}",
            "Nao sabem como",
            "19% dos jovens dizem nao saber por onde comecar. Falta educacao financeira \u{2014} 55% entendem pouco ou nada sobre o tema.",
            p.rose_500,
        ),
        (
            "\u{23F3}",
            "Falta de disciplina",
            "Registrar gastos manualmente e tedioso. A maioria desiste em poucas semanas. 36% dos que tentam usam caderno de papel.",
            p.amber_500,
        ),
        (
            "\u{2699}",
            "Ferramentas complexas",
            "Apps com muitos menus, configuracoes confusas e funcionalidades fragmentadas. Investimentos num app, gastos em outro, projecoes numa planilha.",
            p.blue_500,
        ),
        (
            "\u{20AB}",
            "Ferramentas caras",
            "Organizze cobra R$ 35/mes so para controle manual. Mobills exige plano PRO para IA. Funcionalidades essenciais atras de paywall.",
            p.slate_600,
        ),
    ];

    let (card_w, card_h) = (5.5, 1.8);
    for (i, (icon, title, description, accent)) in reasons.into_iter().enumerate() {
        let x = 0.8 + (i % 2) as f64 * (card_w + 0.6);
        let y = 2.5 + (i / 2) as f64 * (card_h + 0.5);

        c.add_rounded_rect(Bounds::inches(x, y, card_w, card_h), p.white, Some(p.slate_200));
        c.add_text_box(
            Bounds::inches(x + 0.25, y + 0.25, 0.5, 0.5),
            icon,
            &TextStyle::new(20.0, accent).bold(),
        );
        c.add_text_box(
            Bounds::inches(x + 0.85, y + 0.22, card_w - 1.1, 0.4),
            title,
            &TextStyle::new(16.0, p.slate_900).bold(),
        );
        c.add_text_box(
            Bounds::inches(x + 0.85, y + 0.65, card_w - 1.1, card_h - 0.9),
            description,
            &TextStyle::new(12.0, p.slate_600).line_spacing(17.0),
        );
    }

    source_note(&mut c, 6.85, "Fontes: CNDL/SPC Brasil, FEBRABAN");
    c.finish()
}

fn market_today(theme: &Theme) -> Slide {
    let p = &theme.palette;
    let mut c = Canvas::new(theme, p.white);

    section_label(&mut c, 0.4, "O MERCADO HOJE", p.emerald_600);
    c.add_text_box(
        Bounds::inches(0.8, 0.85, 11.0, 0.6),
        "As ferramentas existentes nao resolvem o problema completo.",
        &TextStyle::new(28.0, p.slate_900).bold(),
    );
    c.add_text_box(
        Bounds::inches(0.8, 1.55, 10.0, 0.5),
        "Cada uma ataca um pedaco \u{2014} nenhuma oferece a visao integrada que o usuario precisa.",
        &TextStyle::new(14.0, p.slate_500),
    );

    let competitors = [
        (
            "Mobills",
            "IA apenas via WhatsApp\n(plano PRO). Investimentos\nem app separado.",
            "A partir de R$ 8/mes",
        ),
        (
            "Organizze",
            "Sem IA. Sem investimentos.\nSem plano gratuito.\nInterface datada.",
            "R$ 35/mes (manual)",
        ),
        (
            "GuiaBolso",
            "Descontinuado em 2022.\nUsuarios perderam dados.\nConfianca comprometida.",
            "Encerrado",
        ),
        (
            "Minhas\nEconomias",
            "Interface desatualizada.\nInstabilidade frequente.\nSem IA nem projecao real.",
            "Gratuito (limitado)",
        ),
    ];

    let (card_w, card_h, top) = (2.75, 3.2, 2.4);
    for (i, (name, issues, price)) in competitors.into_iter().enumerate() {
        let x = 0.8 + i as f64 * (card_w + 0.35);

        c.add_rounded_rect(Bounds::inches(x, top, card_w, card_h), p.slate_50, Some(p.slate_200));
        c.add_text_box(
            Bounds::inches(x + 0.25, top + 0.25, card_w - 0.5, 0.7),
            name,
            &TextStyle::new(18.0, p.slate_900).bold(),
        );
        c.add_text_box(
            Bounds::inches(x + 0.25, top + 1.0, card_w - 0.5, 1.4),
            issues,
            &TextStyle::new(12.0, p.slate_600).line_spacing(17.0),
        );
        c.add_text_box(
            Bounds::inches(x + 0.25, top + card_h - 0.6, card_w - 0.5, 0.4),
            price,
            &TextStyle::new(11.0, p.rose_500).bold(),
        );
    }
    c.finish()
}

fn comparison(theme: &Theme) -> Slide {
    let p = &theme.palette;
    let mut c = Canvas::new(theme, p.white);

    section_label(&mut c, 0.35, "COMPARATIVO", p.emerald_600);
    c.add_text_box(
        Bounds::inches(0.8, 0.75, 10.0, 0.6),
        "FinApp vs. concorrentes: funcionalidade por funcionalidade.",
        &TextStyle::new(26.0, p.slate_900).bold(),
    );

    let header_top = Length::inches(1.6);
    c.comparison_header(header_top, "  Funcionalidade", "Concorrentes", "FinApp");

    let rows = [
        ("Plano gratuito completo", "Limitado ou inexistente", "Sim, completo"),
        ("Assistente com IA", "Apenas Mobills (WhatsApp, plano PRO)", "Integrado (Gemini)"),
        ("Importacao OFX/CSV/PDF", "Mobills e Organizze (pagos, so OFX)", "3 formatos + IA"),
        ("KPIs e alertas inteligentes", "Ausente ou basico", "5 KPIs + insights"),
        ("Tetos de orcamento", "Ausente ou rigido", "Por categoria"),
        ("Fluxo de caixa projetado", "Basico ou ausente", "Diario + Previsto"),
        ("Investimentos integrados", "Ausente ou em app separado", "CRUD + Evolucao"),
        ("Fechamento mensal guiado", "Ausente", "Resumo + sugestoes"),
        ("Deteccao de recorrencias", "Ausente", "Automatica"),
        ("Dia de fechamento flexivel", "Ausente ou nao configuravel", "Dias 1 a 28"),
        ("Plataforma web responsiva", "Varia (alguns so mobile)", "Web + mobile"),
    ];

    let first_row = header_top + Length::inches(0.55);
    for (i, (feature, competitors, finapp)) in rows.into_iter().enumerate() {
        let top = first_row + Canvas::comparison_row_height() * i as i64;
        c.comparison_row(top, i, feature, competitors, &format!("{CHECK}{finapp}"));
    }
    c.finish()
}

fn hero(theme: &Theme) -> Slide {
    let p = &theme.palette;
    let mut c = Canvas::new(theme, p.slate_900);

    left_stripe(&mut c);
    c.add_oval(Bounds::inches(10.0, 1.0, 4.5, 4.5), p.slate_800);

    section_label(&mut c, 0.5, "A SOLUCAO", p.emerald_500);
    c.add_text_box(
        Bounds::inches(0.8, 1.5, 8.0, 1.2),
        "Tudo o que voce precisa.\nEm um unico lugar.",
        &TextStyle::new(40.0, p.white).bold().line_spacing(52.0),
    );
    c.add_text_box(
        Bounds::inches(0.8, 3.3, 8.0, 0.8),
        "Contas, transacoes, investimentos, projecoes e um assistente\ncom inteligencia artificial \u{2014} integrados numa plataforma moderna e gratuita.",
        &TextStyle::new(17.0, p.slate_400).line_spacing(26.0),
    );

    let pills = [
        "Controle completo",
        "Projecao de fluxo",
        "Investimentos",
        "Assistente IA",
        "Importacao inteligente",
        "KPIs e alertas",
        "Tetos de orcamento",
        "Fechamento mensal",
        "Deteccao de padroes",
    ];
    for (i, pill) in pills.into_iter().enumerate() {
        let x = 0.8 + (i % 3) as f64 * 3.0;
        let y = 4.5 + (i / 3) as f64 * 0.6;
        let bounds = Bounds::inches(x, y, 2.7, 0.48);

        c.add_rounded_rect(bounds, p.slate_800, Some(p.slate_700));
        c.add_text_box(
            bounds,
            &format!("{CHECK}{pill}"),
            &TextStyle::new(12.0, p.emerald_400).bold().center().middle(),
        );
    }
    c.finish()
}

fn features(theme: &Theme) -> Slide {
    let p = &theme.palette;
    let mut c = Canvas::new(theme, p.slate_50);

    section_label(&mut c, 0.5, "FUNCIONALIDADES", p.emerald_600);
    c.add_text_box(
        Bounds::inches(0.8, 0.85, 10.0, 0.6),
        "Uma plataforma, seis pilares.",
        &TextStyle::new(28.0, p.slate_900).bold(),
    );

    let cards = [
        (
            "$",
            "Controle Financeiro",
            "Contas, cartoes e carteiras. Transacoes com categorias, filtro mensal e saldo em tempo real.",
        ),
        (
            "\u{21C5}",
            "Importacao Inteligente",
            "Importe extratos OFX, CSV ou PDF. PDFs de faturas sao extraidos automaticamente por IA (Gemini). Deteccao de duplicatas e categorizacao automatica.",
        ),
        (
            "\u{27F3}",
            "Transacoes Planejadas",
            "Recorrentes, pontuais e com periodo. Deteccao automatica de padroes nos seus gastos para criar recorrentes.",
        ),
        (
            "\u{2197}",
            "Fluxo e Orcamento",
            "Fluxo Diario e Previsto. KPIs financeiros, tetos de orcamento por categoria e alertas automaticos.",
        ),
        (
            "\u{2261}",
            "Investimentos",
            "Carteira com aportes, resgates e saldos. Evolucao mensal e retorno real descontando inflacao (IPCA).",
        ),
        (
            "\u{2605}",
            "Assistente com IA",
            "Chat com Gemini que analisa seus dados reais. Insights proativos e fechamento mensal guiado.",
        ),
    ];

    let (card_w, card_h) = (3.7, 2.35);
    for (i, (icon, title, description)) in cards.into_iter().enumerate() {
        let x = 0.8 + (i % 3) as f64 * (card_w + 0.4);
        let y = 1.65 + (i / 3) as f64 * (card_h + 0.3);
        c.feature_card(Bounds::inches(x, y, card_w, card_h), icon, title, description, p.emerald_600);
    }
    c.finish()
}

fn assistant(theme: &Theme) -> Slide {
    let p = &theme.palette;
    let mut c = Canvas::new(theme, p.white);

    c.add_rect(Bounds::inches(0.0, 0.0, 6.2, SLIDE_HEIGHT), p.slate_900);
    left_stripe(&mut c);

    c.add_text_box(
        Bounds::inches(0.8, 0.8, 4.5, 0.4),
        "DIFERENCIAL",
        &TextStyle::new(11.0, p.emerald_500).bold(),
    );
    c.add_text_box(
        Bounds::inches(0.8, 1.5, 5.0, 1.5),
        "Um assistente\nque entende\nsuas financas.",
        &TextStyle::new(36.0, p.white).bold().line_spacing(46.0),
    );
    c.add_text_box(
        Bounds::inches(0.8, 3.6, 4.8, 1.0),
        "O FinAssist analisa suas contas, transacoes, recorrentes e investimentos em tempo real para entregar diagnosticos personalizados \u{2014} nao respostas genericas.",
        &TextStyle::new(14.0, p.slate_400).line_spacing(22.0),
    );
    c.add_text_box(
        Bounds::inches(0.8, 5.0, 4.5, 0.4),
        "Powered by Gemini 2.5 Flash",
        &TextStyle::new(11.0, p.slate_500),
    );

    c.add_text_box(
        Bounds::inches(6.8, 0.8, 5.0, 0.4),
        "Pergunte qualquer coisa:",
        &TextStyle::new(14.0, p.slate_500).bold(),
    );

    let questions = [
        "\"Como esta minha saude financeira?\"",
        "\"Minhas despesas estao controladas?\"",
        "\"Minha carteira esta diversificada?\"",
        "\"Quais categorias estouraram o teto?\"",
        "\"Tenho reserva de emergencia suficiente?\"",
        "\"Como posso economizar mais?\"",
    ];
    for (i, question) in questions.into_iter().enumerate() {
        let y = 1.5 + i as f64 * 0.85;
        c.add_rounded_rect(Bounds::inches(6.8, y, 5.5, 0.65), p.emerald_50, Some(p.emerald_100));
        c.add_text_box(
            Bounds::inches(7.1, y, 5.0, 0.65),
            question,
            &TextStyle::new(14.0, p.slate_700).middle(),
        );
    }

    c.add_rounded_rect(Bounds::inches(6.8, 6.6, 5.5, 0.55), p.slate_50, Some(p.slate_200));
    c.add_text_box(
        Bounds::inches(7.1, 6.6, 5.0, 0.55),
        "\u{21BB}  Mantem o contexto da conversa \u{2014} faca perguntas de acompanhamento naturalmente.",
        &TextStyle::new(11.0, p.slate_600).middle(),
    );
    c.finish()
}

fn evidence(theme: &Theme) -> Slide {
    let p = &theme.palette;
    let mut c = Canvas::new(theme, p.slate_50);

    section_label(&mut c, 0.5, "A EVIDENCIA", p.emerald_600);
    c.add_text_box(
        Bounds::inches(0.8, 1.0, 10.0, 0.8),
        "Controlar financas funciona. Os numeros comprovam.",
        &TextStyle::new(32.0, p.slate_900).bold(),
    );

    let cards = [
        (
            "88%",
            "dos usuarios de apps\nfinanceiros consideram\na ferramenta muito\nou extremamente util",
            p.emerald_600,
            "Academy Bank Research",
        ),
        (
            "2,5x",
            "mais chance de\npoupar o suficiente\npara aposentadoria\ncom planejamento",
            p.blue_500,
            "Ramsey Solutions",
        ),
        (
            "+59%",
            "crescimento em\ninstalacoes de apps\nfinanceiros na\nAmerica Latina (2025)",
            p.emerald_600,
            "TI Inside / Adjust",
        ),
        (
            "90%",
            "dos brasileiros\nadmitem precisar\nde educacao\nfinanceira",
            p.amber_500,
            "Funpresp-Jud",
        ),
    ];

    let (card_w, card_h, top) = (2.75, 3.3, 2.5);
    for (i, (number, label, accent, source)) in cards.into_iter().enumerate() {
        let x = 0.8 + i as f64 * (card_w + 0.35);

        c.add_rounded_rect(Bounds::inches(x, top, card_w, card_h), p.white, Some(p.slate_200));
        c.add_rect(
            Bounds::new(
                Length::inches(x + 0.3),
                Length::inches(top + 0.25),
                Length::inches(0.5),
                Length::pt(4.0),
            ),
            accent,
        );
        c.add_text_box(
            Bounds::inches(x + 0.3, top + 0.55, card_w - 0.6, 0.7),
            number,
            &TextStyle::new(40.0, accent).bold(),
        );
        c.add_text_box(
            Bounds::inches(x + 0.3, top + 1.35, card_w - 0.6, 1.3),
            label,
            &TextStyle::new(13.0, p.slate_600).line_spacing(18.0),
        );
        c.add_text_box(
            Bounds::inches(x + 0.3, top + card_h - 0.5, card_w - 0.6, 0.35),
            source,
            &TextStyle::new(9.0, p.slate_400),
        );
    }
    c.finish()
}

fn opportunity(theme: &Theme) -> Slide {
    let p = &theme.palette;
    let mut c = Canvas::new(theme, p.white);

    section_label(&mut c, 0.5, "OPORTUNIDADE", p.emerald_600);
    c.add_text_box(
        Bounds::inches(0.8, 1.0, 10.0, 0.8),
        "Um mercado enorme, com lacunas claras.",
        &TextStyle::new(32.0, p.slate_900).bold(),
    );

    let stats = [
        ("USD 21,4 bi", "Mercado global de apps\nfinanceiros em 2025", p.emerald_600),
        ("42 milhoes", "Brasileiros ja usam\nOpen Finance", p.blue_500),
        ("44%", "Dos bancarizados se veem\ngerindo financas so pelo celular", p.amber_500),
    ];
    for (i, (number, label, accent)) in stats.into_iter().enumerate() {
        let y = 2.3 + i as f64 * 1.7;
        c.add_rect(
            Bounds::new(Length::inches(0.8), Length::inches(y), Length::pt(4.0), Length::inches(1.2)),
            accent,
        );
        c.add_text_box(
            Bounds::inches(1.2, y, 4.5, 0.6),
            number,
            &TextStyle::new(30.0, accent).bold(),
        );
        c.add_text_box(
            Bounds::inches(1.2, y + 0.55, 4.5, 0.6),
            label,
            &TextStyle::new(13.0, p.slate_600).line_spacing(18.0),
        );
    }

    c.add_rounded_rect(Bounds::inches(6.8, 2.3, 5.5, 4.5), p.slate_900, None);
    c.add_text_box(
        Bounds::inches(7.3, 2.7, 4.5, 0.5),
        "FinApp preenche as lacunas:",
        &TextStyle::new(16.0, p.emerald_400).bold(),
    );

    let gaps = [
        "Gratuito e completo \u{2014} sem paywall em funcionalidades essenciais",
        "IA integrada no app \u{2014} nao em canal separado",
        "Importacao OFX, CSV e PDF com IA \u{2014} 3 formatos, nao apenas 1",
        "KPIs, tetos e alertas \u{2014} orcamento ativo, nao passivo",
        "Investimentos na mesma plataforma \u{2014} nao em app a parte",
        "Fechamento mensal e deteccao de padroes \u{2014} inteligencia proativa",
    ];
    c.check_list(
        Bounds::inches(7.3, 3.35, 4.5, 0.52 * gaps.len() as f64),
        &gaps,
        p.emerald_400,
        &TextStyle::new(12.5, p.white)
            .line_spacing(17.0)
            .space_after(Length::pt(6.0)),
    );
    c.finish()
}

fn why_finapp(theme: &Theme) -> Slide {
    let p = &theme.palette;
    let mut c = Canvas::new(theme, p.emerald_600);

    section_label(&mut c, 0.5, "RESUMO", p.emerald_100);
    c.add_text_box(
        Bounds::inches(0.8, 1.2, 10.0, 1.0),
        "Por que FinApp?",
        &TextStyle::new(40.0, p.white).bold(),
    );

    let pillars = [
        (
            "Completo",
            "Contas + Transacoes + Recorrentes +\nInvestimentos + Fluxo + IA\nImportacao OFX, CSV e PDF\n\nTudo integrado, sem fragmentacao.\nSem precisar de 3 apps diferentes.",
        ),
        (
            "Inteligente",
            "Assistente IA com dados reais.\n5 KPIs, insights proativos,\ntetos de orcamento e alertas.\nDeteccao de recorrencias e\nfechamento mensal guiado.",
        ),
        (
            "Acessivel",
            "Interface moderna e intuitiva.\nGratuito e sem paywall.\n\nFuncionalidades que custam\nR$ 35/mes em outros apps.",
        ),
    ];

    let (card_w, card_h, top) = (3.6, 3.5, 2.8);
    for (i, (title, description)) in pillars.into_iter().enumerate() {
        let x = 0.8 + i as f64 * (card_w + 0.45);

        c.add_rounded_rect(Bounds::inches(x, top, card_w, card_h), p.emerald_700, None);
        c.add_text_box(
            Bounds::inches(x + 0.4, top + 0.35, card_w - 0.8, 0.5),
            title,
            &TextStyle::new(22.0, p.white).bold(),
        );
        c.add_rect(
            Bounds::new(
                Length::inches(x + 0.4),
                Length::inches(top + 0.95),
                Length::inches(0.8),
                Length::pt(3.0),
            ),
            p.emerald_400,
        );
        c.add_text_box(
            Bounds::inches(x + 0.4, top + 1.2, card_w - 0.8, card_h - 1.5),
            description,
            &TextStyle::new(13.0, p.emerald_100).line_spacing(19.0),
        );
    }
    c.finish()
}

fn call_to_action(theme: &Theme) -> Slide {
    let p = &theme.palette;
    let mut c = Canvas::new(theme, p.slate_900);

    left_stripe(&mut c);
    c.add_oval(Bounds::inches(9.0, 3.0, 5.0, 5.0), p.slate_800);

    c.add_text_box(
        Bounds::inches(0.8, 2.0, 10.0, 1.2),
        "Assuma o controle\ndas suas financas.",
        &TextStyle::new(44.0, p.white).bold().line_spacing(56.0),
    );
    c.add_text_box(
        Bounds::inches(0.8, 3.8, 8.0, 0.6),
        "Comece hoje. E gratuito.",
        &TextStyle::new(22.0, p.emerald_400),
    );

    let button = Bounds::inches(0.8, 5.0, 3.5, 0.75);
    c.add_rounded_rect(button, p.emerald_600, None);
    c.add_text_box(
        button,
        "Conheca o FinApp  \u{2192}",
        &TextStyle::new(18.0, p.white).bold().center().middle(),
    );

    c.add_rect(
        Bounds::new(Length::inches(0.8), Length::inches(6.4), Length::inches(1.2), Length::pt(2.0)),
        p.emerald_600,
    );
    c.add_text_box(
        Bounds::inches(0.8, 6.6, 6.0, 0.5),
        "FinApp  |  Gestao Financeira Pessoal  |  2026",
        &TextStyle::new(11.0, p.slate_500),
    );
    c.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use findoc_pptx::Geometry;

    #[test]
    fn test_twelve_slides() {
        let slides = build_slides(&Theme::default());
        assert_eq!(slides.len(), 12);
        assert!(slides.iter().all(|s| s.background.is_some()));
    }

    #[test]
    fn test_backgrounds_follow_narrative() {
        let theme = Theme::default();
        let p = &theme.palette;
        let slides = build_slides(&theme);

        let dark = [0, 5, 11];
        for i in dark {
            assert_eq!(slides[i].background, Some(p.slate_900), "slide {}", i + 1);
        }
        assert_eq!(slides[10].background, Some(p.emerald_600));
        assert_eq!(slides[1].background, Some(p.white));
    }

    #[test]
    fn test_cover_text() {
        let slides = build_slides(&Theme::default());
        let texts = slides[0].texts();
        assert_eq!(texts[0], "FinApp");
        assert!(texts.contains(&"Fevereiro 2026".to_string()));
    }

    #[test]
    fn test_comparison_has_eleven_rows() {
        let slides = build_slides(&Theme::default());
        let checks = slides[4]
            .texts()
            .iter()
            .filter(|t| t.starts_with(CHECK))
            .count();
        assert_eq!(checks, 11);
    }

    #[test]
    fn test_feature_and_stat_cards() {
        let slides = build_slides(&Theme::default());

        let ovals = slides[6]
            .shapes
            .iter()
            .filter(|s| s.geometry == Geometry::Ellipse)
            .count();
        assert_eq!(ovals, 6);

        assert!(slides[1].find_text("R$ 518 bi").is_some());
        assert!(slides[8].find_text("Funpresp-Jud").is_some());
    }

    #[test]
    fn test_render_uses_metadata() {
        let mut settings = Settings::default();
        settings.metadata.creator = "Equipe FinApp".to_string();

        let bytes = render(&settings).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}

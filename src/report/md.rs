use crate::types::product::ScoredProduct;
use crate::types::report::{
    CategoryListPage, CheckPage, ComparisonPage, Page, ProductPage, RankingPage,
};

pub fn to_markdown(page: &Page) -> String {
    match page {
        Page::Categories(page) => categories(page),
        Page::Ranking(page) => ranking(page),
        Page::Product(page) => product(page),
        Page::Comparison(page) => comparison(page),
        Page::Check(page) => check(page),
    }
}

fn categories(page: &CategoryListPage) -> String {
    let mut output = String::from("# Categories\n\n");
    if page.categories.is_empty() {
        output.push_str("- none\n");
    }
    for category in &page.categories {
        output.push_str(&format!("- {category}\n"));
    }
    output
}

fn ranking(page: &RankingPage) -> String {
    let mut output = format!("# Ranking: {}\n\n", page.category);
    for (index, rank) in page.materials.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} (mean eco score {:.3}, {} products)\n",
            index + 1,
            rank.material,
            rank.mean_score,
            rank.products
        ));
    }
    output
}

fn product(page: &ProductPage) -> String {
    let mut output = format!(
        "# Product #{}: {} {}\n\n",
        page.product.id, page.product.product.material, page.product.product.category
    );
    push_details(&mut output, &page.product);
    output.push_str(&format!(
        "- predicted label: {} ({:?})\n",
        page.prediction.label, page.prediction.source
    ));
    output.push_str(&format!(
        "- material rank: {} of {}{}\n\n",
        page.rank,
        page.ranked_materials,
        if page.is_best { " (best in category)" } else { "" }
    ));

    output.push_str("## Next Alternative\n\n");
    match &page.alternative {
        Some(alternative) => output.push_str(&format!(
            "- #{} {} (eco score {:.3})\n",
            alternative.id, alternative.product.material, alternative.eco_score
        )),
        None => output.push_str("- none: this is the last material in the ranking\n"),
    }
    output
}

fn comparison(page: &ComparisonPage) -> String {
    let mut output = String::from("# Comparison\n\n");
    for side in [&page.first, &page.second] {
        output.push_str(&format!("## {}\n\n", side.category));
        output.push_str(&format!(
            "- best material: {} (#{})\n",
            side.product.product.material, side.product.id
        ));
        push_details(&mut output, &side.product);
        output.push('\n');
    }
    output
}

fn check(page: &CheckPage) -> String {
    let mut output = String::from("# Sustainability Check\n\n");
    output.push_str(&format!(
        "- recyclability: {:.1}%\n- carbon: {:.2} kgCO2\n- biodegradability: {:.1}%\n- lifespan: {:.1} years (catalog max {:.1})\n",
        page.metrics.recyclability_pct,
        page.metrics.carbon_kgco2,
        page.metrics.biodegradability_pct,
        page.metrics.lifespan_years,
        page.max_life
    ));
    output.push_str(&format!("- eco score: {:.3}\n", page.eco_score));
    output.push_str(&format!(
        "- result: {} (eco-friendly from {:.2}, moderate from {:.2})\n",
        page.label, page.thresholds.eco_friendly, page.thresholds.moderate
    ));
    output
}

fn push_details(output: &mut String, scored: &ScoredProduct) {
    let product = &scored.product;
    output.push_str(&format!("- eco score: {:.3}\n", scored.eco_score));
    output.push_str(&format!(
        "- recyclability: {:.1}%\n- carbon: {:.2} kgCO2\n- biodegradability: {:.1}%\n- lifespan: {:.1} years\n",
        product.recyclability_pct,
        product.carbon_kgco2,
        product.biodegradability_pct,
        product.lifespan_years
    ));
    if let Some(variant) = &product.variant {
        output.push_str(&format!("- variant: {variant}\n"));
    }
    if let Some(link) = &product.product_link {
        output.push_str(&format!("- link: {link}\n"));
    }
}

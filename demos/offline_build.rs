//! Offline build example for geoplaces-rs
//!
//! Runs the whole transform against small inline payloads instead of the
//! GeoNames downloads and prints the resulting JSON document.

use geoplaces_rs::prelude::*;

const CITIES: &str = "\
3117735\tMadrid\tMadrid\t\t40.4165\t-3.70256\tP\tPPLC\tES\t\t29\tM\t28079\t\t3255944\t\t665\tEurope/Madrid\t2024-06-04
3128760\tBarcelona\tBarcelona\t\t41.38879\t2.15899\tP\tPPLA\tES\t\t56\tB\t08019\t\t1620343\t\t15\tEurope/Madrid\t2024-06-04
2520600\tCádiz\tCadiz\t\t36.52672\t-6.2891\tP\tPPLA2\tES\t\t51\tCA\t11012\t\t116027\t\t5\tEurope/Madrid\t2024-06-04
2511174\tSanta Cruz de Tenerife\tSanta Cruz de Tenerife\t\t28.46824\t-16.25462\tP\tPPLA2\tES\t\t53\tTF\t38038\t\t206593\t\t23\tAtlantic/Canary\t2024-06-04
";

const COUNTRIES: &str = "\
#ISO\tISO3\tISO-Numeric\tfips\tCountry\tCapital\tArea(in sq km)\tPopulation\tContinent\ttld\tCurrencyCode\tCurrencyName\tPhone\tPostal Code Format\tPostal Code Regex\tLanguages\tgeonameid\tneighbours\tEquivalentFipsCode
ES\tESP\t724\tSP\tSpain\tMadrid\t504782\t46723749\tEU\t.es\tEUR\tEuro\t34\t#####\t\tes-ES,ca,gl,eu,oc\t2510769\tAD,PT,GI,FR,MA\t
";

const BACKWARD: &str = "Link\tAtlantic/Canary\tAtlantic/Canaries_Old\n";

fn main() -> Result<()> {
    let sources = Sources {
        cities: parse_cities_tsv(CITIES),
        countries: parse_countries(COUNTRIES)?,
        legacy: parse_legacy_links(BACKWARD),
    };

    let build = sources.build()?;
    print_histogram(
        "Selected places by feature code",
        &feature_histogram(build.selected.iter().copied()),
    );
    println!("{} of {}", build.stats.places, build.stats.filtered);

    let json = build.dataset.to_json_bytes()?;
    println!("{}", String::from_utf8_lossy(&json));
    Ok(())
}

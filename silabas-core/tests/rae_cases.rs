//! RAE reference words, grouped by the options they are split with

use silabas_core::{syllabify_with, Options, PrefixStrategy, Region};

const PHONETIC: &[(&str, &[&str])] = &[
    ("a", &["a"]),
    ("sol", &["sol"]),
    ("tren", &["tren"]),
    ("pan", &["pan"]),
    ("luz", &["luz"]),
    ("es", &["es"]),
    ("un", &["un"]),
    ("no", &["no"]),
    ("yo", &["yo"]),
    ("ya", &["ya"]),
    ("casa", &["ca", "sa"]),
    ("mapa", &["ma", "pa"]),
    ("comer", &["co", "mer"]),
    ("cantar", &["can", "tar"]),
    ("amigo", &["a", "mi", "go"]),
    ("elefante", &["e", "le", "fan", "te"]),
    ("mar", &["mar"]),
    ("club", &["club"]),
    ("vals", &["vals"]),
    ("vid", &["vid"]),
    ("red", &["red"]),
    ("dos", &["dos"]),
    ("voy", &["voy"]),
    ("ley", &["ley"]),
    ("mesa", &["me", "sa"]),
    ("abrir", &["a", "brir"]),
    ("vivir", &["vi", "vir"]),
    ("jugar", &["ju", "gar"]),
    ("objeto", &["ob", "je", "to"]),
    ("isla", &["is", "la"]),
    ("urna", &["ur", "na"]),
    ("idea", &["i", "de", "a"]),
    ("oasis", &["o", "a", "sis"]),
    ("puede", &["pue", "de"]),
    ("aire", &["ai", "re"]),
    ("ciudad", &["ciu", "dad"]),
    ("rey", &["rey"]),
    ("guau", &["guau"]),
    ("averiguáis", &["a", "ve", "ri", "guáis"]),
    ("río", &["rí", "o"]),
    ("leer", &["le", "er"]),
    ("cooperar", &["co", "o", "pe", "rar"]),
    ("día", &["dí", "a"]),
    ("baúl", &["ba", "úl"]),
    ("caótico", &["ca", "ó", "ti", "co"]),
    ("guion", &["guion"]),
    ("truhan", &["truhan"]),
    ("veintiún", &["vein", "tiún"]),
    ("jesuita", &["je", "sui", "ta"]),
    ("chiita", &["chi", "i", "ta"]),
    ("duunviro", &["du", "un", "vi", "ro"]),
    ("chií", &["chi", "í"]),
    ("friísimo", &["fri", "í", "si", "mo"]),
    ("oír", &["o", "ír"]),
    ("reír", &["re", "ír"]),
    ("laúd", &["la", "úd"]),
    ("reúne", &["re", "ú", "ne"]),
    ("frío", &["frí", "o"]),
    ("continúo", &["con", "ti", "nú", "o"]),
    ("jaula", &["jau", "la"]),
    ("peine", &["pei", "ne"]),
    ("heroico", &["he", "roi", "co"]),
    ("neutro", &["neu", "tro"]),
    ("bou", &["bou"]),
    ("circuito", &["cir", "cui", "to"]),
    ("ruina", &["rui", "na"]),
    ("bilingüe", &["bi", "lin", "güe"]),
    ("fuimos", &["fui", "mos"]),
    ("suave", &["sua", "ve"]),
    ("prieto", &["prie", "to"]),
    ("radio", &["ra", "dio"]),
    ("bestia", &["bes", "tia"]),
    ("auxilio", &["au", "xi", "lio"]),
    ("voyeur", &["vo", "yeur"]),
    ("interviú", &["in", "ter", "viú"]),
    ("fluir", &["fluir"]),
    ("incluir", &["in", "cluir"]),
    ("confiáis", &["con", "fiáis"]),
    ("situáis", &["si", "tuáis"]),
    ("Uruguay", &["U", "ru", "guay"]),
    ("vieira", &["viei", "ra"]),
    ("hioides", &["hioi", "des"]),
    ("coágulo", &["co", "á", "gu", "lo"]),
    ("proeza", &["pro", "e", "za"]),
    ("israelí", &["is", "ra", "e", "lí"]),
    ("tiito", &["ti", "i", "to"]),
    ("contraalmirante", &["con", "tra", "al", "mi", "ran", "te"]),
    ("portaaviones", &["por", "ta", "a", "vio", "nes"]),
    ("sobreesdrújula", &["so", "bre", "es", "drú", "ju", "la"]),
    ("poseer", &["po", "se", "er"]),
    ("semiinconsciente", &["se", "mi", "in", "cons", "cien", "te"]),
    ("zoólogo", &["zo", "ó", "lo", "go"]),
    ("protozoo", &["pro", "to", "zo", "o"]),
    ("leíais", &["le", "í", "ais"]),
    ("caíais", &["ca", "í", "ais"]),
    ("creíais", &["cre", "í", "ais"]),
    ("veíais", &["ve", "í", "ais"]),
    ("apreciáis", &["a", "pre", "ciáis"]),
    ("ahí", &["a", "hí"]),
    ("búho", &["bú", "ho"]),
    ("rehén", &["re", "hén"]),
    ("alcohol", &["al", "co", "hol"]),
    ("cohete", &["co", "he", "te"]),
    ("prohíbe", &["pro", "hí", "be"]),
    ("ahijado", &["ahi", "ja", "do"]),
    ("ahumado", &["ahu", "ma", "do"]),
    ("sahumerio", &["sahu", "me", "rio"]),
    ("rehusar", &["rehu", "sar"]),
    ("deshacer", &["des", "ha", "cer"]),
    ("deshielo", &["des", "hie", "lo"]),
    ("deshonra", &["des", "hon", "ra"]),
    ("anhelo", &["an", "he", "lo"]),
    ("alhaja", &["al", "ha", "ja"]),
    ("inhábil", &["in", "há", "bil"]),
    ("inhibir", &["in", "hi", "bir"]),
    ("exhalar", &["ex", "ha", "lar"]),
    ("exhausto", &["ex", "haus", "to"]),
    ("adhesión", &["ad", "he", "sión"]),
    ("subhumano", &["sub", "hu", "ma", "no"]),
    ("enhebrar", &["en", "he", "brar"]),
    ("subhasta", &["sub", "has", "ta"]),
    ("exhibir", &["ex", "hi", "bir"]),
    ("exhortar", &["ex", "hor", "tar"]),
    ("inherente", &["in", "he", "ren", "te"]),
    ("vehemencia", &["ve", "he", "men", "cia"]),
    ("buhardilla", &["buhar", "di", "lla"]),
    ("aplicar", &["a", "pli", "car"]),
    ("hablar", &["ha", "blar"]),
    ("reglamento", &["re", "gla", "men", "to"]),
    ("afluente", &["a", "fluen", "te"]),
    ("aprisa", &["a", "pri", "sa"]),
    ("abrigo", &["a", "bri", "go"]),
    ("letrado", &["le", "tra", "do"]),
    ("ajedrez", &["a", "je", "drez"]),
    ("recreo", &["re", "cre", "o"]),
    ("vinagre", &["vi", "na", "gre"]),
    ("afrontar", &["a", "fron", "tar"]),
    ("obturar", &["ob", "tu", "rar"]),
    ("adviento", &["ad", "vien", "to"]),
    ("subjetivo", &["sub", "je", "ti", "vo"]),
    ("absoluto", &["ab", "so", "lu", "to"]),
    ("ritmo", &["rit", "mo"]),
    ("amnesia", &["am", "ne", "sia"]),
    ("insomne", &["in", "som", "ne"]),
    ("arácnido", &["a", "rác", "ni", "do"]),
    ("arritmia", &["a", "rrit", "mia"]),
    ("pizza", &["piz", "za"]),
    ("atlas", &["at", "las"]),
    ("construir", &["cons", "truir"]),
    ("substrato", &["subs", "tra", "to"]),
    ("instruir", &["ins", "truir"]),
    ("transgredir", &["trans", "gre", "dir"]),
    ("exprimir", &["ex", "pri", "mir"]),
    ("exclusivo", &["ex", "clu", "si", "vo"]),
    ("explanada", &["ex", "pla", "na", "da"]),
    ("hombro", &["hom", "bro"]),
    ("instructor", &["ins", "truc", "tor"]),
    ("abstruso", &["abs", "tru", "so"]),
    ("transcribir", &["trans", "cri", "bir"]),
    ("subrayar", &["su", "bra", "yar"]),
    ("sublunar", &["su", "blu", "nar"]),
    ("inhumano", &["in", "hu", "ma", "no"]),
    ("contraorden", &["con", "tra", "or", "den"]),
    ("antiimperialista", &["an", "ti", "im", "pe", "ria", "lis", "ta"]),
    ("rehidratar", &["rehi", "dra", "tar"]),
    ("desarrollar", &["de", "sa", "rro", "llar"]),
    ("posguerra", &["pos", "gue", "rra"]),
    ("postguerra", &["post", "gue", "rra"]),
    ("exalumno", &["e", "xa", "lum", "no"]),
    ("superhombre", &["su", "per", "hom", "bre"]),
    ("ineficaz", &["i", "ne", "fi", "caz"]),
    ("anormal", &["a", "nor", "mal"]),
    ("improbable", &["im", "pro", "ba", "ble"]),
    ("vicepresidente", &["vi", "ce", "pre", "si", "den", "te"]),
    ("contradecir", &["con", "tra", "de", "cir"]),
    ("rehacer", &["re", "ha", "cer"]),
    ("supermercado", &["su", "per", "mer", "ca", "do"]),
    ("intramuscular", &["in", "tra", "mus", "cu", "lar"]),
    ("adjunto", &["ad", "jun", "to"]),
    ("abjurar", &["ab", "ju", "rar"]),
    ("atleta", &["at", "le", "ta"]),
    ("atlántico", &["at", "lán", "ti", "co"]),
    ("otorrinolaringologo", &["o", "to", "rri", "no", "la", "rin", "go", "lo", "go"]),
    ("electroencefalografista", &["e", "lec", "tro", "en", "ce", "fa", "lo", "gra", "fis", "ta"]),
    ("constitucionalidad", &["cons", "ti", "tu", "cio", "na", "li", "dad"]),
    ("desoxirribonucleico", &["de", "so", "xi", "rri", "bo", "nu", "clei", "co"]),
    ("esternocleidomastoideo", &["es", "ter", "no", "clei", "do", "mas", "toi", "de", "o"]),
    ("caleidoscopio", &["ca", "lei", "dos", "co", "pio"]),
    ("anticonstitucionalmente", &["an", "ti", "cons", "ti", "tu", "cio", "nal", "men", "te"]),
    ("ciclopentanoperhidrofenantreno", &["ci", "clo", "pen", "ta", "no", "per", "hi", "dro", "fe", "nan", "tre", "no"]),
    ("neuroendocrino", &["neu", "ro", "en", "do", "cri", "no"]),
    ("telecomunicaciones", &["te", "le", "co", "mu", "ni", "ca", "cio", "nes"]),
    ("fotolitografía", &["fo", "to", "li", "to", "gra", "fí", "a"]),
    ("xzzptk", &["xzzptk"]),
    ("libro", &["li", "bro"]),
    ("chucho", &["chu", "cho"]),
    ("allá", &["a", "llá"]),
    ("lluvia", &["llu", "via"]),
    ("perro", &["pe", "rro"]),
    ("carroza", &["ca", "rro", "za"]),
    ("correr", &["co", "rrer"]),
    ("pluma", &["plu", "ma"]),
    ("cable", &["ca", "ble"]),
    ("clavo", &["cla", "vo"]),
    ("regla", &["re", "gla"]),
    ("flaco", &["fla", "co"]),
    ("precio", &["pre", "cio"]),
    ("atrás", &["a", "trás"]),
    ("cuadro", &["cua", "dro"]),
    ("secreto", &["se", "cre", "to"]),
    ("logro", &["lo", "gro"]),
    ("fruta", &["fru", "ta"]),
    ("costa", &["cos", "ta"]),
    ("pasta", &["pas", "ta"]),
    ("apto", &["ap", "to"]),
    ("actor", &["ac", "tor"]),
    ("perfecto", &["per", "fec", "to"]),
    ("dictar", &["dic", "tar"]),
    ("pacto", &["pac", "to"]),
    ("acción", &["ac", "ción"]),
    ("técnica", &["téc", "ni", "ca"]),
    ("atmósfera", &["at", "mós", "fe", "ra"]),
    ("magno", &["mag", "no"]),
    ("signo", &["sig", "no"]),
    ("instante", &["ins", "tan", "te"]),
    ("obstruir", &["obs", "truir"]),
    ("perspicaz", &["pers", "pi", "caz"]),
    ("substraer", &["subs", "tra", "er"]),
    ("inspirar", &["ins", "pi", "rar"]),
    ("explicar", &["ex", "pli", "car"]),
    ("desprecio", &["des", "pre", "cio"]),
    ("amplitud", &["am", "pli", "tud"]),
    ("compra", &["com", "pra"]),
    ("inflar", &["in", "flar"]),
    ("anglófilo", &["an", "gló", "fi", "lo"]),
    ("abstracto", &["abs", "trac", "to"]),
    ("constreñir", &["cons", "tre", "ñir"]),
    ("adscribir", &["ads", "cri", "bir"]),
    ("abstemio", &["abs", "te", "mio"]),
    ("auto", &["au", "to"]),
    ("reina", &["rei", "na"]),
    ("boina", &["boi", "na"]),
    ("deuda", &["deu", "da"]),
    ("estadounidense", &["es", "ta", "dou", "ni", "den", "se"]),
    ("viuda", &["viu", "da"]),
    ("muy", &["muy"]),
    ("ruido", &["rui", "do"]),
    ("pingüe", &["pin", "güe"]),
    ("argüir", &["ar", "güir"]),
    ("fuego", &["fue", "go"]),
    ("cuota", &["cuo", "ta"]),
    ("residuo", &["re", "si", "duo"]),
    ("puerta", &["puer", "ta"]),
    ("cielo", &["cie", "lo"]),
    ("piojo", &["pio", "jo"]),
    ("viaje", &["via", "je"]),
    ("diente", &["dien", "te"]),
    ("triunfo", &["triun", "fo"]),
    ("diurno", &["diur", "no"]),
    ("limpiáis", &["lim", "piáis"]),
    ("amortigüéis", &["a", "mor", "ti", "güéis"]),
    ("actuáis", &["ac", "tuáis"]),
    ("buey", &["buey"]),
    ("Paraguay", &["Pa", "ra", "guay"]),
    ("caos", &["ca", "os"]),
    ("aorta", &["a", "or", "ta"]),
    ("teatro", &["te", "a", "tro"]),
    ("línea", &["lí", "ne", "a"]),
    ("héroe", &["hé", "ro", "e"]),
    ("poema", &["po", "e", "ma"]),
    ("creer", &["cre", "er"]),
    ("roedor", &["ro", "e", "dor"]),
    ("loor", &["lo", "or"]),
    ("zoo", &["zo", "o"]),
    ("maíz", &["ma", "íz"]),
    ("raíz", &["ra", "íz"]),
    ("país", &["pa", "ís"]),
    ("freír", &["fre", "ír"]),
    ("raúl", &["ra", "úl"]),
    ("transeúnte", &["tran", "se", "ún", "te"]),
    ("flúor", &["flú", "or"]),
    ("flor", &["flor"]),
    ("luna", &["lu", "na"]),
    ("hacha", &["ha", "cha"]),
    ("techo", &["te", "cho"]),
    ("mecanichucho", &["me", "ca", "ni", "chu", "cho"]),
    ("billete", &["bi", "lle", "te"]),
    ("callado", &["ca", "lla", "do"]),
    ("folletín", &["fo", "lle", "tín"]),
    ("zorrillo", &["zo", "rri", "llo"]),
    ("barrer", &["ba", "rrer"]),
    ("arrecife", &["a", "rre", "ci", "fe"]),
    ("terremoto", &["te", "rre", "mo", "to"]),
    ("combinar", &["com", "bi", "nar"]),
    ("guaucho", &["guau", "cho"]),
    ("ahogo", &["a", "ho", "go"]),
    ("caída", &["ca", "í", "da"]),
    ("egoísta", &["e", "go", "ís", "ta"]),
    ("ataúd", &["a", "ta", "úd"]),
    ("reúma", &["re", "ú", "ma"]),
    ("desvarío", &["des", "va", "rí", "o"]),
    ("evalúo", &["e", "va", "lú", "o"]),
    ("chiismo", &["chi", "is", "mo"]),
    ("bahía", &["ba", "hí", "a"]),
    ("vehículo", &["ve", "hí", "cu", "lo"]),
    ("vahído", &["va", "hí", "do"]),
    ("mohíno", &["mo", "hí", "no"]),
    ("prohibición", &["prohi", "bi", "ción"]),
    ("desahucio", &["de", "sahu", "cio"]),
    ("cohibido", &["cohi", "bi", "do"]),
    ("ahínco", &["a", "hín", "co"]),
    ("adherir", &["ad", "he", "rir"]),
    ("cohesión", &["co", "he", "sión"]),
    ("excomulgar", &["ex", "co", "mul", "gar"]),
    ("obnubilar", &["ob", "nu", "bi", "lar"]),
    ("paralelepípedo", &["pa", "ra", "le", "le", "pí", "pe", "do"]),
];

const WITHOUT_HIATUS: &[(&str, &[&str])] = &[
    ("pais", &["pais"]),
    ("neuroendocrino", &["neu", "roen", "do", "cri", "no"]),
];

const MEXICO: &[(&str, &[&str])] = &[
    ("atlas", &["a", "tlas"]),
    ("atleta", &["a", "tle", "ta"]),
    ("atlántico", &["a", "tlán", "ti", "co"]),
];

const MORPHOLOGICAL: &[(&str, &[&str])] = &[
    ("subrayar", &["sub", "ra", "yar"]),
    ("sublunar", &["sub", "lu", "nar"]),
    ("deshacer", &["des", "ha", "cer"]),
    ("inhumano", &["in", "hu", "ma", "no"]),
    ("cooperar", &["co", "o", "pe", "rar"]),
    ("contraorden", &["con", "tra", "or", "den"]),
    ("antiimperialista", &["a", "nti", "im", "pe", "ria", "lis", "ta"]),
    ("rehidratar", &["re", "hi", "dra", "tar"]),
    ("exalumno", &["ex", "a", "lum", "no"]),
    ("inhábil", &["in", "há", "bil"]),
    ("ineficaz", &["in", "e", "fi", "caz"]),
    ("anormal", &["a", "nor", "mal"]),
    ("improbable", &["im", "pro", "ba", "ble"]),
    ("vicepresidente", &["vi", "ce", "pre", "si", "den", "te"]),
    ("contradecir", &["con", "tra", "de", "cir"]),
    ("rehacer", &["re", "ha", "cer"]),
    ("excomulgar", &["ex", "co", "mul", "gar"]),
    ("supermercado", &["su", "per", "mer", "ca", "do"]),
    ("intramuscular", &["in", "tra", "mus", "cu", "lar"]),
    ("obnubilar", &["ob", "nu", "bi", "lar"]),
    ("adjunto", &["a", "djun", "to"]),
    ("abjurar", &["ab", "ju", "rar"]),
];

const ADAPTIVE: &[(&str, &[&str])] = &[
    ("subrayar", &["su", "bra", "yar"]),
    ("sublunar", &["sub", "lu", "nar"]),
    ("deshacer", &["des", "ha", "cer"]),
    ("inhumano", &["in", "hu", "ma", "no"]),
    ("cooperar", &["co", "o", "pe", "rar"]),
    ("contraorden", &["con", "tra", "or", "den"]),
    ("antiimperialista", &["an", "ti", "im", "pe", "ria", "lis", "ta"]),
    ("rehidratar", &["rehi", "dra", "tar"]),
    ("exalumno", &["e", "xa", "lum", "no"]),
    ("inhábil", &["in", "há", "bil"]),
    ("suboficial", &["sub", "o", "fi", "cial"]),
    ("ineficaz", &["in", "e", "fi", "caz"]),
    ("anormal", &["a", "nor", "mal"]),
    ("improbable", &["im", "pro", "ba", "ble"]),
    ("vicepresidente", &["vi", "ce", "pre", "si", "den", "te"]),
    ("contradecir", &["con", "tra", "de", "cir"]),
    ("rehacer", &["re", "ha", "cer"]),
    ("excomulgar", &["ex", "co", "mul", "gar"]),
    ("supermercado", &["su", "per", "mer", "ca", "do"]),
    ("intramuscular", &["in", "tra", "mus", "cu", "lar"]),
    ("obnubilar", &["ob", "nu", "bi", "lar"]),
    ("adjunto", &["ad", "jun", "to"]),
    ("abjurar", &["ab", "ju", "rar"]),
    ("superrealista", &["su", "pe", "rre", "a", "lis", "ta"]),
];

fn check_table(table: &[(&str, &[&str])], options: Options) {
    let mut failures = Vec::new();
    for (word, expected) in table {
        let result = syllabify_with(word, &options).unwrap();
        if result.syllables != *expected {
            failures.push(format!("{word}: got {:?}, expected {expected:?}", result.syllables));
            continue;
        }

        assert_eq!(result.word(), *word, "syllables must rebuild {word}");
        let mut offset = 0;
        let points: Vec<usize> = result
            .syllables
            .iter()
            .take(result.syllables.len() - 1)
            .map(|s| {
                offset += s.chars().count();
                offset
            })
            .collect();
        assert_eq!(result.division_points, points, "division points of {word}");
    }
    assert!(failures.is_empty(), "{} mismatches:\n{}", failures.len(), failures.join("\n"));
}

#[test]
fn test_phonetic_words() {
    check_table(PHONETIC, Options::default());
}

#[test]
fn test_words_without_hiatus() {
    check_table(WITHOUT_HIATUS, Options::default().with_hiatus(false));
}

#[test]
fn test_mexican_tl() {
    check_table(MEXICO, Options::default().with_region(Region::EsMx));
}

#[test]
fn test_morphological_prefixes() {
    check_table(
        MORPHOLOGICAL,
        Options::default().with_prefix_strategy(PrefixStrategy::Morphological),
    );
}

#[test]
fn test_adaptive_prefixes() {
    check_table(
        ADAPTIVE,
        Options::default().with_prefix_strategy(PrefixStrategy::Adaptive),
    );
}

#[test]
fn test_adaptive_keeps_digraph_after_prefix() {
    let options = Options::default().with_prefix_strategy(PrefixStrategy::Adaptive);
    let result = syllabify_with("superrealista", &options).unwrap();
    assert_eq!(
        result.exception_names(),
        vec![
            "Adaptativa_Ignora_Morfologica_Digrafo",
            "Prefijo_Detectado_Ignorado: super",
            "Hiato_Separado",
        ]
    );
}

#[test]
fn test_long_consonant_run() {
    let result = syllabify_with("anstrslo", &Options::default()).unwrap();
    assert_eq!(result.syllables, vec!["ans", "trslo"]);
    assert_eq!(result.division_points, vec![3]);
    assert_eq!(result.exception_names(), vec!["Grupo_C_Largo_VCC.RestoV"]);
}

#[test]
fn test_regions_other_than_mexico_split_tl() {
    for region in [Region::EsEs, Region::EsAr, Region::EsCo, Region::EsUs] {
        let options = Options::default().with_region(region);
        let result = syllabify_with("atleta", &options).unwrap();
        assert_eq!(result.syllables, vec!["at", "le", "ta"], "{region}");
    }
}

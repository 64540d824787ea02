use std::path::Path;

pub(crate) const ONE_GRAMS: &str = "\
id,group_id,feat,value,group_norm
1,100,he,1,0.2
2,100,told,1,0.2
3,100,his,1,0.2
4,100,brother,1,0.2
5,100,thanks,1,0.2
6,200,she,1,0.5
7,200,smiled,1,0.5
8,300,please,1,1.0
9,400,him,1,0.5
10,400,sir,1,0.5
";

pub(crate) const CATEGORIES: &str = "\
id,group_id,feat,value,group_norm
1,100,SHEHE,1,0.2
2,200,SHEHE,1,0.5
3,300,POSEMO,1,1.0
4,400,SHEHE,1,0.5
";

pub(crate) const ORIGINAL_SCORES: &str = "\
id,group_id,feat,value,group_norm
1,100,POLITE,1,0.5
2,200,POLITE,1,0.25
3,400,POLITE,1,1.0
";

pub(crate) const TRANSFORMED_SCORES: &str = "\
id,group_id,feat,value,group_norm
1,100,POLITE,1,0.25
2,200,POLITE,1,0.25
3,400,POLITE,1,0.5
";

pub(crate) fn write_fixtures(dir: &Path) {
    std::fs::write(dir.join("feat_1gram.csv"), ONE_GRAMS).unwrap();
    std::fs::write(dir.join("categories.csv"), CATEGORIES).unwrap();
    std::fs::write(dir.join("original_scores.csv"), ORIGINAL_SCORES).unwrap();
}

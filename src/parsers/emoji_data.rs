//! Generated bidirectional emoji name table (common Slack short names).
//! Regenerate rather than editing rows by hand.

pub(crate) const EMOJI_TABLE: &[(&str, &str)] = &[
    ("smile", "\u{1f604}"),
    ("smiley", "\u{1f603}"),
    ("grinning", "\u{1f600}"),
    ("grin", "\u{1f601}"),
    ("laughing", "\u{1f606}"),
    ("satisfied", "\u{1f606}"),
    ("joy", "\u{1f602}"),
    ("rofl", "\u{1f923}"),
    ("sweat_smile", "\u{1f605}"),
    ("slightly_smiling_face", "\u{1f642}"),
    ("upside_down_face", "\u{1f643}"),
    ("wink", "\u{1f609}"),
    ("blush", "\u{1f60a}"),
    ("innocent", "\u{1f607}"),
    ("smiling_face_with_3_hearts", "\u{1f970}"),
    ("heart_eyes", "\u{1f60d}"),
    ("star-struck", "\u{1f929}"),
    ("kissing_heart", "\u{1f618}"),
    ("kissing", "\u{1f617}"),
    ("relaxed", "\u{263a}\u{fe0f}"),
    ("yum", "\u{1f60b}"),
    ("stuck_out_tongue", "\u{1f61b}"),
    ("stuck_out_tongue_winking_eye", "\u{1f61c}"),
    ("zany_face", "\u{1f92a}"),
    ("stuck_out_tongue_closed_eyes", "\u{1f61d}"),
    ("money_mouth_face", "\u{1f911}"),
    ("hugging_face", "\u{1f917}"),
    ("face_with_hand_over_mouth", "\u{1f92d}"),
    ("shushing_face", "\u{1f92b}"),
    ("thinking_face", "\u{1f914}"),
    ("zipper_mouth_face", "\u{1f910}"),
    ("face_with_raised_eyebrow", "\u{1f928}"),
    ("neutral_face", "\u{1f610}"),
    ("expressionless", "\u{1f611}"),
    ("no_mouth", "\u{1f636}"),
    ("smirk", "\u{1f60f}"),
    ("unamused", "\u{1f612}"),
    ("face_with_rolling_eyes", "\u{1f644}"),
    ("grimacing", "\u{1f62c}"),
    ("lying_face", "\u{1f925}"),
    ("relieved", "\u{1f60c}"),
    ("pensive", "\u{1f614}"),
    ("sleepy", "\u{1f62a}"),
    ("drooling_face", "\u{1f924}"),
    ("sleeping", "\u{1f634}"),
    ("mask", "\u{1f637}"),
    ("face_with_thermometer", "\u{1f912}"),
    ("face_with_head_bandage", "\u{1f915}"),
    ("nauseated_face", "\u{1f922}"),
    ("face_vomiting", "\u{1f92e}"),
    ("sneezing_face", "\u{1f927}"),
    ("hot_face", "\u{1f975}"),
    ("cold_face", "\u{1f976}"),
    ("woozy_face", "\u{1f974}"),
    ("dizzy_face", "\u{1f635}"),
    ("exploding_head", "\u{1f92f}"),
    ("face_with_cowboy_hat", "\u{1f920}"),
    ("partying_face", "\u{1f973}"),
    ("sunglasses", "\u{1f60e}"),
    ("nerd_face", "\u{1f913}"),
    ("face_with_monocle", "\u{1f9d0}"),
    ("confused", "\u{1f615}"),
    ("worried", "\u{1f61f}"),
    ("slightly_frowning_face", "\u{1f641}"),
    ("frowning", "\u{1f626}"),
    ("open_mouth", "\u{1f62e}"),
    ("hushed", "\u{1f62f}"),
    ("astonished", "\u{1f632}"),
    ("flushed", "\u{1f633}"),
    ("pleading_face", "\u{1f97a}"),
    ("anguished", "\u{1f627}"),
    ("fearful", "\u{1f628}"),
    ("cold_sweat", "\u{1f630}"),
    ("disappointed_relieved", "\u{1f625}"),
    ("cry", "\u{1f622}"),
    ("sob", "\u{1f62d}"),
    ("scream", "\u{1f631}"),
    ("confounded", "\u{1f616}"),
    ("persevere", "\u{1f623}"),
    ("disappointed", "\u{1f61e}"),
    ("sweat", "\u{1f613}"),
    ("weary", "\u{1f629}"),
    ("tired_face", "\u{1f62b}"),
    ("yawning_face", "\u{1f971}"),
    ("triumph", "\u{1f624}"),
    ("rage", "\u{1f621}"),
    ("angry", "\u{1f620}"),
    ("face_with_symbols_on_mouth", "\u{1f92c}"),
    ("smiling_imp", "\u{1f608}"),
    ("imp", "\u{1f47f}"),
    ("skull", "\u{1f480}"),
    ("skull_and_crossbones", "\u{2620}\u{fe0f}"),
    ("hankey", "\u{1f4a9}"),
    ("poop", "\u{1f4a9}"),
    ("clown_face", "\u{1f921}"),
    ("japanese_ogre", "\u{1f479}"),
    ("japanese_goblin", "\u{1f47a}"),
    ("ghost", "\u{1f47b}"),
    ("alien", "\u{1f47d}"),
    ("space_invader", "\u{1f47e}"),
    ("robot_face", "\u{1f916}"),
    ("smiley_cat", "\u{1f63a}"),
    ("smile_cat", "\u{1f638}"),
    ("joy_cat", "\u{1f639}"),
    ("heart_eyes_cat", "\u{1f63b}"),
    ("smirk_cat", "\u{1f63c}"),
    ("kissing_cat", "\u{1f63d}"),
    ("scream_cat", "\u{1f640}"),
    ("crying_cat_face", "\u{1f63f}"),
    ("pouting_cat", "\u{1f63e}"),
    ("wave", "\u{1f44b}"),
    ("raised_back_of_hand", "\u{1f91a}"),
    ("raised_hand_with_fingers_splayed", "\u{1f590}\u{fe0f}"),
    ("hand", "\u{270b}"),
    ("raised_hand", "\u{270b}"),
    ("spock-hand", "\u{1f596}"),
    ("ok_hand", "\u{1f44c}"),
    ("pinching_hand", "\u{1f90f}"),
    ("v", "\u{270c}\u{fe0f}"),
    ("crossed_fingers", "\u{1f91e}"),
    ("i_love_you_hand_sign", "\u{1f91f}"),
    ("the_horns", "\u{1f918}"),
    ("call_me_hand", "\u{1f919}"),
    ("point_left", "\u{1f448}"),
    ("point_right", "\u{1f449}"),
    ("point_up_2", "\u{1f446}"),
    ("middle_finger", "\u{1f595}"),
    ("point_down", "\u{1f447}"),
    ("point_up", "\u{261d}\u{fe0f}"),
    ("+1", "\u{1f44d}"),
    ("thumbsup", "\u{1f44d}"),
    ("-1", "\u{1f44e}"),
    ("thumbsdown", "\u{1f44e}"),
    ("fist", "\u{270a}"),
    ("facepunch", "\u{1f44a}"),
    ("punch", "\u{1f44a}"),
    ("left-facing_fist", "\u{1f91b}"),
    ("right-facing_fist", "\u{1f91c}"),
    ("clap", "\u{1f44f}"),
    ("raised_hands", "\u{1f64c}"),
    ("open_hands", "\u{1f450}"),
    ("palms_up_together", "\u{1f932}"),
    ("handshake", "\u{1f91d}"),
    ("pray", "\u{1f64f}"),
    ("writing_hand", "\u{270d}\u{fe0f}"),
    ("nail_care", "\u{1f485}"),
    ("selfie", "\u{1f933}"),
    ("muscle", "\u{1f4aa}"),
    ("ear", "\u{1f442}"),
    ("nose", "\u{1f443}"),
    ("eyes", "\u{1f440}"),
    ("eye", "\u{1f441}\u{fe0f}"),
    ("tongue", "\u{1f445}"),
    ("lips", "\u{1f444}"),
    ("baby", "\u{1f476}"),
    ("child", "\u{1f9d2}"),
    ("boy", "\u{1f466}"),
    ("girl", "\u{1f467}"),
    ("adult", "\u{1f9d1}"),
    ("man", "\u{1f468}"),
    ("woman", "\u{1f469}"),
    ("older_man", "\u{1f474}"),
    ("older_woman", "\u{1f475}"),
    ("person_with_blond_hair", "\u{1f471}"),
    ("bow", "\u{1f647}"),
    ("facepalm", "\u{1f926}"),
    ("shrug", "\u{1f937}"),
    ("dancer", "\u{1f483}"),
    ("man_dancing", "\u{1f57a}"),
    ("walking", "\u{1f6b6}"),
    ("runner", "\u{1f3c3}"),
    ("running", "\u{1f3c3}"),
    ("couple", "\u{1f46b}"),
    ("family", "\u{1f46a}"),
    ("speaking_head_in_silhouette", "\u{1f5e3}\u{fe0f}"),
    ("bust_in_silhouette", "\u{1f464}"),
    ("busts_in_silhouette", "\u{1f465}"),
    ("heart", "\u{2764}\u{fe0f}"),
    ("orange_heart", "\u{1f9e1}"),
    ("yellow_heart", "\u{1f49b}"),
    ("green_heart", "\u{1f49a}"),
    ("blue_heart", "\u{1f499}"),
    ("purple_heart", "\u{1f49c}"),
    ("black_heart", "\u{1f5a4}"),
    ("broken_heart", "\u{1f494}"),
    ("heavy_heart_exclamation_mark_ornament", "\u{2763}\u{fe0f}"),
    ("two_hearts", "\u{1f495}"),
    ("revolving_hearts", "\u{1f49e}"),
    ("heartbeat", "\u{1f493}"),
    ("heartpulse", "\u{1f497}"),
    ("sparkling_heart", "\u{1f496}"),
    ("cupid", "\u{1f498}"),
    ("gift_heart", "\u{1f49d}"),
    ("heart_decoration", "\u{1f49f}"),
    ("100", "\u{1f4af}"),
    ("anger", "\u{1f4a2}"),
    ("boom", "\u{1f4a5}"),
    ("collision", "\u{1f4a5}"),
    ("dizzy", "\u{1f4ab}"),
    ("sweat_drops", "\u{1f4a6}"),
    ("dash", "\u{1f4a8}"),
    ("bomb", "\u{1f4a3}"),
    ("speech_balloon", "\u{1f4ac}"),
    ("thought_balloon", "\u{1f4ad}"),
    ("zzz", "\u{1f4a4}"),
    ("fire", "\u{1f525}"),
    ("sparkles", "\u{2728}"),
    ("star", "\u{2b50}"),
    ("star2", "\u{1f31f}"),
    ("zap", "\u{26a1}"),
    ("sunny", "\u{2600}\u{fe0f}"),
    ("partly_sunny", "\u{26c5}"),
    ("cloud", "\u{2601}\u{fe0f}"),
    ("rain_cloud", "\u{1f327}\u{fe0f}"),
    ("snowflake", "\u{2744}\u{fe0f}"),
    ("snowman", "\u{26c4}"),
    ("umbrella", "\u{2614}"),
    ("droplet", "\u{1f4a7}"),
    ("ocean", "\u{1f30a}"),
    ("rainbow", "\u{1f308}"),
    ("crescent_moon", "\u{1f319}"),
    ("full_moon", "\u{1f315}"),
    ("new_moon", "\u{1f311}"),
    ("sun_with_face", "\u{1f31e}"),
    ("earth_africa", "\u{1f30d}"),
    ("earth_americas", "\u{1f30e}"),
    ("earth_asia", "\u{1f30f}"),
    ("globe_with_meridians", "\u{1f310}"),
    ("dog", "\u{1f436}"),
    ("cat", "\u{1f431}"),
    ("mouse", "\u{1f42d}"),
    ("hamster", "\u{1f439}"),
    ("rabbit", "\u{1f430}"),
    ("fox_face", "\u{1f98a}"),
    ("bear", "\u{1f43b}"),
    ("panda_face", "\u{1f43c}"),
    ("koala", "\u{1f428}"),
    ("tiger", "\u{1f42f}"),
    ("lion_face", "\u{1f981}"),
    ("cow", "\u{1f42e}"),
    ("pig", "\u{1f437}"),
    ("frog", "\u{1f438}"),
    ("monkey_face", "\u{1f435}"),
    ("see_no_evil", "\u{1f648}"),
    ("hear_no_evil", "\u{1f649}"),
    ("speak_no_evil", "\u{1f64a}"),
    ("chicken", "\u{1f414}"),
    ("penguin", "\u{1f427}"),
    ("bird", "\u{1f426}"),
    ("baby_chick", "\u{1f424}"),
    ("duck", "\u{1f986}"),
    ("owl", "\u{1f989}"),
    ("bat", "\u{1f987}"),
    ("wolf", "\u{1f43a}"),
    ("horse", "\u{1f434}"),
    ("unicorn_face", "\u{1f984}"),
    ("bee", "\u{1f41d}"),
    ("bug", "\u{1f41b}"),
    ("butterfly", "\u{1f98b}"),
    ("snail", "\u{1f40c}"),
    ("snake", "\u{1f40d}"),
    ("turtle", "\u{1f422}"),
    ("fish", "\u{1f41f}"),
    ("dolphin", "\u{1f42c}"),
    ("whale", "\u{1f433}"),
    ("shark", "\u{1f988}"),
    ("octopus", "\u{1f419}"),
    ("crab", "\u{1f980}"),
    ("tropical_fish", "\u{1f420}"),
    ("bouquet", "\u{1f490}"),
    ("cherry_blossom", "\u{1f338}"),
    ("rose", "\u{1f339}"),
    ("hibiscus", "\u{1f33a}"),
    ("sunflower", "\u{1f33b}"),
    ("tulip", "\u{1f337}"),
    ("seedling", "\u{1f331}"),
    ("evergreen_tree", "\u{1f332}"),
    ("deciduous_tree", "\u{1f333}"),
    ("palm_tree", "\u{1f334}"),
    ("cactus", "\u{1f335}"),
    ("herb", "\u{1f33f}"),
    ("four_leaf_clover", "\u{1f340}"),
    ("maple_leaf", "\u{1f341}"),
    ("fallen_leaf", "\u{1f342}"),
    ("mushroom", "\u{1f344}"),
    ("apple", "\u{1f34e}"),
    ("green_apple", "\u{1f34f}"),
    ("banana", "\u{1f34c}"),
    ("watermelon", "\u{1f349}"),
    ("grapes", "\u{1f347}"),
    ("strawberry", "\u{1f353}"),
    ("melon", "\u{1f348}"),
    ("cherries", "\u{1f352}"),
    ("peach", "\u{1f351}"),
    ("pineapple", "\u{1f34d}"),
    ("lemon", "\u{1f34b}"),
    ("avocado", "\u{1f951}"),
    ("tomato", "\u{1f345}"),
    ("eggplant", "\u{1f346}"),
    ("corn", "\u{1f33d}"),
    ("hot_pepper", "\u{1f336}\u{fe0f}"),
    ("bread", "\u{1f35e}"),
    ("cheese_wedge", "\u{1f9c0}"),
    ("egg", "\u{1f95a}"),
    ("bacon", "\u{1f953}"),
    ("pancakes", "\u{1f95e}"),
    ("hamburger", "\u{1f354}"),
    ("fries", "\u{1f35f}"),
    ("hotdog", "\u{1f32d}"),
    ("pizza", "\u{1f355}"),
    ("sandwich", "\u{1f96a}"),
    ("taco", "\u{1f32e}"),
    ("burrito", "\u{1f32f}"),
    ("ramen", "\u{1f35c}"),
    ("spaghetti", "\u{1f35d}"),
    ("sushi", "\u{1f363}"),
    ("bento", "\u{1f371}"),
    ("curry", "\u{1f35b}"),
    ("rice", "\u{1f35a}"),
    ("doughnut", "\u{1f369}"),
    ("cookie", "\u{1f36a}"),
    ("cake", "\u{1f370}"),
    ("birthday", "\u{1f382}"),
    ("cupcake", "\u{1f9c1}"),
    ("chocolate_bar", "\u{1f36b}"),
    ("candy", "\u{1f36c}"),
    ("lollipop", "\u{1f36d}"),
    ("ice_cream", "\u{1f368}"),
    ("icecream", "\u{1f366}"),
    ("popcorn", "\u{1f37f}"),
    ("coffee", "\u{2615}"),
    ("tea", "\u{1f375}"),
    ("beer", "\u{1f37a}"),
    ("beers", "\u{1f37b}"),
    ("clinking_glasses", "\u{1f942}"),
    ("wine_glass", "\u{1f377}"),
    ("cocktail", "\u{1f378}"),
    ("tropical_drink", "\u{1f379}"),
    ("champagne", "\u{1f37e}"),
    ("milk_glass", "\u{1f95b}"),
    ("cup_with_straw", "\u{1f964}"),
    ("soccer", "\u{26bd}"),
    ("basketball", "\u{1f3c0}"),
    ("football", "\u{1f3c8}"),
    ("baseball", "\u{26be}"),
    ("tennis", "\u{1f3be}"),
    ("volleyball", "\u{1f3d0}"),
    ("8ball", "\u{1f3b1}"),
    ("ping_pong", "\u{1f3d3}"),
    ("dart", "\u{1f3af}"),
    ("bowling", "\u{1f3b3}"),
    ("video_game", "\u{1f3ae}"),
    ("game_die", "\u{1f3b2}"),
    ("jigsaw", "\u{1f9e9}"),
    ("chess_pawn", "\u{265f}\u{fe0f}"),
    ("trophy", "\u{1f3c6}"),
    ("medal", "\u{1f3c5}"),
    ("first_place_medal", "\u{1f947}"),
    ("second_place_medal", "\u{1f948}"),
    ("third_place_medal", "\u{1f949}"),
    ("tada", "\u{1f389}"),
    ("confetti_ball", "\u{1f38a}"),
    ("balloon", "\u{1f388}"),
    ("gift", "\u{1f381}"),
    ("crystal_ball", "\u{1f52e}"),
    ("joystick", "\u{1f579}\u{fe0f}"),
    ("art", "\u{1f3a8}"),
    ("circus_tent", "\u{1f3aa}"),
    ("microphone", "\u{1f3a4}"),
    ("headphones", "\u{1f3a7}"),
    ("musical_note", "\u{1f3b5}"),
    ("notes", "\u{1f3b6}"),
    ("guitar", "\u{1f3b8}"),
    ("trumpet", "\u{1f3ba}"),
    ("violin", "\u{1f3bb}"),
    ("drum_with_drumsticks", "\u{1f941}"),
    ("clapper", "\u{1f3ac}"),
    ("movie_camera", "\u{1f3a5}"),
    ("camera", "\u{1f4f7}"),
    ("tv", "\u{1f4fa}"),
    ("radio", "\u{1f4fb}"),
    ("iphone", "\u{1f4f1}"),
    ("computer", "\u{1f4bb}"),
    ("desktop_computer", "\u{1f5a5}\u{fe0f}"),
    ("keyboard", "\u{2328}\u{fe0f}"),
    ("printer", "\u{1f5a8}\u{fe0f}"),
    ("floppy_disk", "\u{1f4be}"),
    ("cd", "\u{1f4bf}"),
    ("telephone_receiver", "\u{1f4de}"),
    ("phone", "\u{260e}\u{fe0f}"),
    ("battery", "\u{1f50b}"),
    ("electric_plug", "\u{1f50c}"),
    ("bulb", "\u{1f4a1}"),
    ("flashlight", "\u{1f526}"),
    ("candle", "\u{1f56f}\u{fe0f}"),
    ("wastebasket", "\u{1f5d1}\u{fe0f}"),
    ("moneybag", "\u{1f4b0}"),
    ("dollar", "\u{1f4b5}"),
    ("credit_card", "\u{1f4b3}"),
    ("gem", "\u{1f48e}"),
    ("hammer", "\u{1f528}"),
    ("wrench", "\u{1f527}"),
    ("gear", "\u{2699}\u{fe0f}"),
    ("hammer_and_wrench", "\u{1f6e0}\u{fe0f}"),
    ("pick", "\u{26cf}\u{fe0f}"),
    ("nut_and_bolt", "\u{1f529}"),
    ("chains", "\u{26d3}\u{fe0f}"),
    ("link", "\u{1f517}"),
    ("paperclip", "\u{1f4ce}"),
    ("scissors", "\u{2702}\u{fe0f}"),
    ("straight_ruler", "\u{1f4cf}"),
    ("pushpin", "\u{1f4cc}"),
    ("round_pushpin", "\u{1f4cd}"),
    ("triangular_flag_on_post", "\u{1f6a9}"),
    ("memo", "\u{1f4dd}"),
    ("pencil2", "\u{270f}\u{fe0f}"),
    ("black_nib", "\u{2712}\u{fe0f}"),
    ("book", "\u{1f4d6}"),
    ("books", "\u{1f4da}"),
    ("notebook", "\u{1f4d3}"),
    ("ledger", "\u{1f4d2}"),
    ("page_facing_up", "\u{1f4c4}"),
    ("newspaper", "\u{1f4f0}"),
    ("bookmark", "\u{1f516}"),
    ("label", "\u{1f3f7}\u{fe0f}"),
    ("envelope", "\u{2709}\u{fe0f}"),
    ("email", "\u{2709}\u{fe0f}"),
    ("inbox_tray", "\u{1f4e5}"),
    ("outbox_tray", "\u{1f4e4}"),
    ("package", "\u{1f4e6}"),
    ("mailbox", "\u{1f4eb}"),
    ("postbox", "\u{1f4ee}"),
    ("mega", "\u{1f4e3}"),
    ("loudspeaker", "\u{1f4e2}"),
    ("bell", "\u{1f514}"),
    ("no_bell", "\u{1f515}"),
    ("bar_chart", "\u{1f4ca}"),
    ("chart_with_upwards_trend", "\u{1f4c8}"),
    ("chart_with_downwards_trend", "\u{1f4c9}"),
    ("clipboard", "\u{1f4cb}"),
    ("calendar", "\u{1f4c6}"),
    ("date", "\u{1f4c5}"),
    ("file_folder", "\u{1f4c1}"),
    ("open_file_folder", "\u{1f4c2}"),
    ("card_index_dividers", "\u{1f5c2}\u{fe0f}"),
    ("lock", "\u{1f512}"),
    ("unlock", "\u{1f513}"),
    ("key", "\u{1f511}"),
    ("old_key", "\u{1f5dd}\u{fe0f}"),
    ("mag", "\u{1f50d}"),
    ("mag_right", "\u{1f50e}"),
    ("microscope", "\u{1f52c}"),
    ("telescope", "\u{1f52d}"),
    ("satellite_antenna", "\u{1f4e1}"),
    ("syringe", "\u{1f489}"),
    ("pill", "\u{1f48a}"),
    ("door", "\u{1f6aa}"),
    ("bed", "\u{1f6cf}\u{fe0f}"),
    ("couch_and_lamp", "\u{1f6cb}\u{fe0f}"),
    ("toilet", "\u{1f6bd}"),
    ("shower", "\u{1f6bf}"),
    ("bathtub", "\u{1f6c1}"),
    ("hourglass", "\u{231b}"),
    ("hourglass_flowing_sand", "\u{23f3}"),
    ("watch", "\u{231a}"),
    ("alarm_clock", "\u{23f0}"),
    ("stopwatch", "\u{23f1}\u{fe0f}"),
    ("timer_clock", "\u{23f2}\u{fe0f}"),
    ("clock12", "\u{1f55b}"),
    ("thermometer", "\u{1f321}\u{fe0f}"),
    ("car", "\u{1f697}"),
    ("taxi", "\u{1f695}"),
    ("bus", "\u{1f68c}"),
    ("racing_car", "\u{1f3ce}\u{fe0f}"),
    ("police_car", "\u{1f693}"),
    ("ambulance", "\u{1f691}"),
    ("fire_engine", "\u{1f692}"),
    ("truck", "\u{1f69a}"),
    ("tractor", "\u{1f69c}"),
    ("bike", "\u{1f6b2}"),
    ("motor_scooter", "\u{1f6f5}"),
    ("rotating_light", "\u{1f6a8}"),
    ("traffic_light", "\u{1f6a6}"),
    ("construction", "\u{1f6a7}"),
    ("fuelpump", "\u{26fd}"),
    ("steam_locomotive", "\u{1f682}"),
    ("train", "\u{1f68b}"),
    ("metro", "\u{1f687}"),
    ("station", "\u{1f689}"),
    ("airplane", "\u{2708}\u{fe0f}"),
    ("rocket", "\u{1f680}"),
    ("flying_saucer", "\u{1f6f8}"),
    ("helicopter", "\u{1f681}"),
    ("boat", "\u{26f5}"),
    ("ship", "\u{1f6a2}"),
    ("anchor", "\u{2693}"),
    ("ferris_wheel", "\u{1f3a1}"),
    ("roller_coaster", "\u{1f3a2}"),
    ("camping", "\u{1f3d5}\u{fe0f}"),
    ("mountain", "\u{26f0}\u{fe0f}"),
    ("volcano", "\u{1f30b}"),
    ("desert_island", "\u{1f3dd}\u{fe0f}"),
    ("beach_with_umbrella", "\u{1f3d6}\u{fe0f}"),
    ("house", "\u{1f3e0}"),
    ("office", "\u{1f3e2}"),
    ("hospital", "\u{1f3e5}"),
    ("bank", "\u{1f3e6}"),
    ("hotel", "\u{1f3e8}"),
    ("school", "\u{1f3eb}"),
    ("church", "\u{26ea}"),
    ("stadium", "\u{1f3df}\u{fe0f}"),
    ("statue_of_liberty", "\u{1f5fd}"),
    ("tokyo_tower", "\u{1f5fc}"),
    ("night_with_stars", "\u{1f303}"),
    ("cityscape", "\u{1f3d9}\u{fe0f}"),
    ("bridge_at_night", "\u{1f309}"),
    ("fountain", "\u{26f2}"),
    ("tent", "\u{26fa}"),
    ("foggy", "\u{1f301}"),
    ("white_check_mark", "\u{2705}"),
    ("heavy_check_mark", "\u{2714}\u{fe0f}"),
    ("ballot_box_with_check", "\u{2611}\u{fe0f}"),
    ("x", "\u{274c}"),
    ("negative_squared_cross_mark", "\u{274e}"),
    ("heavy_plus_sign", "\u{2795}"),
    ("heavy_minus_sign", "\u{2796}"),
    ("heavy_division_sign", "\u{2797}"),
    ("heavy_multiplication_x", "\u{2716}\u{fe0f}"),
    ("question", "\u{2753}"),
    ("grey_question", "\u{2754}"),
    ("exclamation", "\u{2757}"),
    ("grey_exclamation", "\u{2755}"),
    ("bangbang", "\u{203c}\u{fe0f}"),
    ("interrobang", "\u{2049}\u{fe0f}"),
    ("warning", "\u{26a0}\u{fe0f}"),
    ("no_entry", "\u{26d4}"),
    ("no_entry_sign", "\u{1f6ab}"),
    ("ok", "\u{1f197}"),
    ("new", "\u{1f195}"),
    ("free", "\u{1f193}"),
    ("up", "\u{1f199}"),
    ("cool", "\u{1f192}"),
    ("sos", "\u{1f198}"),
    ("vs", "\u{1f19a}"),
    ("arrow_up", "\u{2b06}\u{fe0f}"),
    ("arrow_down", "\u{2b07}\u{fe0f}"),
    ("arrow_left", "\u{2b05}\u{fe0f}"),
    ("arrow_right", "\u{27a1}\u{fe0f}"),
    ("arrows_counterclockwise", "\u{1f504}"),
    ("repeat", "\u{1f501}"),
    ("fast_forward", "\u{23e9}"),
    ("rewind", "\u{23ea}"),
    ("arrow_forward", "\u{25b6}\u{fe0f}"),
    ("arrow_backward", "\u{25c0}\u{fe0f}"),
    ("pause_button", "\u{23f8}\u{fe0f}"),
    ("black_square_for_stop", "\u{23f9}\u{fe0f}"),
    ("black_circle_for_record", "\u{23fa}\u{fe0f}"),
    ("eject", "\u{23cf}\u{fe0f}"),
    ("infinity", "\u{267e}\u{fe0f}"),
    ("recycle", "\u{267b}\u{fe0f}"),
    ("trident", "\u{1f531}"),
    ("beginner", "\u{1f530}"),
    ("o", "\u{2b55}"),
    ("red_circle", "\u{1f534}"),
    ("large_blue_circle", "\u{1f535}"),
    ("white_circle", "\u{26aa}"),
    ("black_circle", "\u{26ab}"),
    ("small_red_triangle", "\u{1f53a}"),
    ("small_red_triangle_down", "\u{1f53b}"),
    ("diamond_shape_with_a_dot_inside", "\u{1f4a0}"),
    ("radio_button", "\u{1f518}"),
    ("white_square_button", "\u{1f533}"),
    ("black_square_button", "\u{1f532}"),
    ("checkered_flag", "\u{1f3c1}"),
    ("crossed_flags", "\u{1f38c}"),
    ("black_flag", "\u{1f3f4}"),
    ("waving_white_flag", "\u{1f3f3}\u{fe0f}"),
    ("flag-us", "\u{1f1fa}\u{1f1f8}"),
    ("flag-gb", "\u{1f1ec}\u{1f1e7}"),
    ("flag-de", "\u{1f1e9}\u{1f1ea}"),
    ("flag-fr", "\u{1f1eb}\u{1f1f7}"),
    ("flag-jp", "\u{1f1ef}\u{1f1f5}"),
    ("flag-cn", "\u{1f1e8}\u{1f1f3}"),
    ("crown", "\u{1f451}"),
    ("tophat", "\u{1f3a9}"),
    ("mortar_board", "\u{1f393}"),
    ("eyeglasses", "\u{1f453}"),
    ("dark_sunglasses", "\u{1f576}\u{fe0f}"),
    ("necktie", "\u{1f454}"),
    ("shirt", "\u{1f455}"),
    ("jeans", "\u{1f456}"),
    ("dress", "\u{1f457}"),
    ("coat", "\u{1f9e5}"),
    ("socks", "\u{1f9e6}"),
    ("gloves", "\u{1f9e4}"),
    ("scarf", "\u{1f9e3}"),
    ("athletic_shoe", "\u{1f45f}"),
    ("high_heel", "\u{1f460}"),
    ("handbag", "\u{1f45c}"),
    ("briefcase", "\u{1f4bc}"),
    ("school_satchel", "\u{1f392}"),
    ("umbrella_with_rain_drops", "\u{2614}"),
    ("ring", "\u{1f48d}"),
    ("lipstick", "\u{1f484}"),
    ("kiss", "\u{1f48b}"),
    ("hocho", "\u{1f52a}"),
    ("gun", "\u{1f52b}"),
    ("shield", "\u{1f6e1}\u{fe0f}"),
    ("dagger_knife", "\u{1f5e1}\u{fe0f}"),
    ("crossed_swords", "\u{2694}\u{fe0f}"),
    ("smoking", "\u{1f6ac}"),
    ("coffin", "\u{26b0}\u{fe0f}"),
    ("amphora", "\u{1f3fa}"),
    ("moyai", "\u{1f5ff}"),
    ("spiral_calendar_pad", "\u{1f5d3}\u{fe0f}"),
    ("spiral_note_pad", "\u{1f5d2}\u{fe0f}"),
    ("white_flower", "\u{1f4ae}"),
    ("ophiuchus", "\u{26ce}"),
    ("six_pointed_star", "\u{1f52f}"),
    ("aries", "\u{2648}"),
    ("taurus", "\u{2649}"),
    ("gemini", "\u{264a}"),
    ("cancer", "\u{264b}"),
    ("leo", "\u{264c}"),
    ("virgo", "\u{264d}"),
    ("libra", "\u{264e}"),
    ("scorpius", "\u{264f}"),
    ("sagittarius", "\u{2650}"),
    ("capricorn", "\u{2651}"),
    ("aquarius", "\u{2652}"),
    ("pisces", "\u{2653}"),
    ("id", "\u{1f194}"),
    ("atm", "\u{1f3e7}"),
    ("wheelchair", "\u{267f}"),
    ("mens", "\u{1f6b9}"),
    ("womens", "\u{1f6ba}"),
    ("restroom", "\u{1f6bb}"),
    ("baby_symbol", "\u{1f6bc}"),
    ("children_crossing", "\u{1f6b8}"),
    ("do_not_litter", "\u{1f6af}"),
    ("no_smoking", "\u{1f6ad}"),
    ("no_pedestrians", "\u{1f6b7}"),
    ("no_bicycles", "\u{1f6b3}"),
    ("non-potable_water", "\u{1f6b1}"),
    ("underage", "\u{1f51e}"),
    ("no_mobile_phones", "\u{1f4f5}"),
    ("keycap_ten", "\u{1f51f}"),
    ("1234", "\u{1f522}"),
    ("hash", "\u{23}\u{fe0f}\u{20e3}"),
    ("symbols", "\u{1f523}"),
    ("abc", "\u{1f524}"),
    ("abcd", "\u{1f521}"),
    ("capital_abcd", "\u{1f520}"),
    ("information_source", "\u{2139}\u{fe0f}"),
    ("cinema", "\u{1f3a6}"),
    ("signal_strength", "\u{1f4f6}"),
    ("vibration_mode", "\u{1f4f3}"),
    ("mobile_phone_off", "\u{1f4f4}"),
];
